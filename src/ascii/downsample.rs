//! Area-averaging downsampling from pixel data to character grids.
//!
//! Each output cell covers a (possibly fractional) rectangle of source
//! pixels. Its value is the coverage-weighted mean of every pixel that
//! rectangle touches, so partially covered border pixels contribute in
//! proportion to the area they share with the cell. For integer scale
//! factors this reduces to a plain box average.

/// Source pixels touched by one output cell along one axis, with the
/// fraction of each pixel that falls inside the cell.
type AxisSpan = Vec<(usize, f64)>;

/// Compute the per-cell coverage spans for one axis.
fn axis_spans(src_len: usize, dst_len: usize) -> Vec<AxisSpan> {
    let scale = src_len as f64 / dst_len as f64;

    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = ((d + 1) as f64 * scale).min(src_len as f64);
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);

            let mut span: AxisSpan = (first..last)
                .filter_map(|s| {
                    let lo = start.max(s as f64);
                    let hi = end.min((s + 1) as f64);
                    let weight = hi - lo;
                    (weight > 0.0).then_some((s, weight))
                })
                .collect();

            // Float drift can leave a sliver cell empty at the far edge.
            if span.is_empty() {
                span.push((first.min(src_len - 1), 1.0));
            }
            span
        })
        .collect()
}

/// Downsample a grayscale image to a character grid.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `char_width` - Desired output width in characters
/// * `char_height` - Desired output height in characters
///
/// # Returns
/// `char_width * char_height` brightness values in row-major order, or an
/// empty vector if any dimension is zero or `gray` is too short.
///
/// # Example
/// ```ignore
/// let brightness = downsample(&grayscale, 640, 480, 120, 60);
/// assert_eq!(brightness.len(), 120 * 60);
/// ```
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
) -> Vec<u8> {
    let mut out = Vec::new();
    downsample_into(gray, img_width, img_height, char_width, char_height, &mut out);
    out
}

/// Downsample a grayscale image into an existing buffer.
///
/// # Returns
/// The number of brightness values written to the buffer.
pub fn downsample_into(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
    buffer: &mut Vec<u8>,
) -> usize {
    buffer.clear();

    let src_w = img_width as usize;
    let src_h = img_height as usize;
    if char_width == 0 || char_height == 0 || src_w == 0 || src_h == 0 {
        return 0;
    }
    if gray.len() < src_w * src_h {
        return 0;
    }

    let cols = axis_spans(src_w, char_width as usize);
    let rows = axis_spans(src_h, char_height as usize);
    buffer.reserve(cols.len() * rows.len());

    for row_span in &rows {
        let row_weight: f64 = row_span.iter().map(|&(_, w)| w).sum();
        for col_span in &cols {
            let col_weight: f64 = col_span.iter().map(|&(_, w)| w).sum();

            let mut sum = 0.0;
            for &(sy, wy) in row_span {
                let line = &gray[sy * src_w..(sy + 1) * src_w];
                for &(sx, wx) in col_span {
                    sum += line[sx] as f64 * wx * wy;
                }
            }

            let mean = sum / (row_weight * col_weight);
            buffer.push(mean.round().clamp(0.0, 255.0) as u8);
        }
    }

    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_spans_integer_ratio() {
        let spans = axis_spans(4, 2);
        assert_eq!(spans, vec![vec![(0, 1.0), (1, 1.0)], vec![(2, 1.0), (3, 1.0)]]);
    }

    #[test]
    fn test_axis_spans_fractional_ratio() {
        // 3 pixels into 2 cells: each cell gets 1.5 pixels
        let spans = axis_spans(3, 2);
        assert_eq!(spans[0], vec![(0, 1.0), (1, 0.5)]);
        assert_eq!(spans[1], vec![(1, 0.5), (2, 1.0)]);
    }

    #[test]
    fn test_axis_spans_upscale_covers_single_pixel() {
        let spans = axis_spans(2, 4);
        let sources: Vec<usize> = spans.iter().map(|s| s[0].0).collect();
        assert_eq!(sources, vec![0, 0, 1, 1]);
        assert!(spans.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_fractional_average_weights_shared_pixel() {
        // 3x1 -> 2x1: cell 0 = (0*1 + 90*0.5) / 1.5 = 30
        //             cell 1 = (90*0.5 + 180*1) / 1.5 = 150
        let out = downsample(&[0, 90, 180], 3, 1, 2, 1);
        assert_eq!(out, vec![30, 150]);
    }

    #[test]
    fn test_short_buffer_yields_nothing() {
        assert!(downsample(&[1, 2, 3], 2, 2, 1, 1).is_empty());
    }
}
