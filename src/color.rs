/// RGBA color from HSV components, each in `[0, 1]`. Alpha is always 1.
///
/// Six-sector conversion with linear interpolation inside each sector;
/// a hue of 1 wraps back to red.
pub(crate) fn hsv_to_rgba(hue: f32, saturation: f32, brightness: f32) -> [f32; 4] {
    let hue = hue.clamp(0.0, 1.0);

    let c = brightness * saturation;
    let x = c * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());
    let m = brightness - c;

    let (r, g, b) = if hue < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if hue < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if hue < 3.0 / 6.0 {
        (0.0, c, x)
    } else if hue < 4.0 / 6.0 {
        (0.0, x, c)
    } else if hue < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r + m, g + m, b + m, 1.0]
}
