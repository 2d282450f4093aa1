/// Espace colorimétrique HSB/HSV (Teinte, Saturation, Brillance/Valeur)
#[derive(Clone, Copy, Debug)]
pub struct Hsb {
    pub h: f64, // Teinte [0, 360)
    pub s: f64, // Saturation [0, 1]
    pub b: f64, // Brillance/Valeur [0, 1]
}

/// Convertit HSB/HSV vers RGB ; la teinte est ramenée dans [0, 360).
pub fn hsb_to_rgb(hsb: Hsb) -> (u8, u8, u8) {
    let h = hsb.h.rem_euclid(360.0);
    let s = hsb.s.clamp(0.0, 1.0);
    let v = hsb.b.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((g + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((b + m) * 255.0).clamp(0.0, 255.0) as u8,
    )
}
