//! Mode boucle : rendu à la demande sur un flux texte/binaire.
//!
//! Après `ready\n`, chaque ligne `rmin rmax imin imax res` produit une
//! fenêtre de `round((rmax-rmin)·res) x round((imax-imin)·res)` pixels,
//! renvoyée comme un compte d'octets sur 8 octets little-endian suivi des
//! octets RGB. Une requête invalide reçoit une réponse vide (compte nul).

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::RenderParams;
use crate::error::{Result, ZetaError};
use crate::lut::ChainView;
use crate::render::render;
use crate::view::Settings;

/// Parse une requête et en déduit les paramètres de rendu.
pub fn parse_request(line: &str, base: &RenderParams) -> Result<RenderParams> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| ZetaError::Config(format!("requête '{line}': {e}")))?;
    let &[rmin, rmax, imin, imax, res] = values.as_slice() else {
        return Err(ZetaError::Config(format!(
            "requête '{line}': attendu rmin rmax imin imax res"
        )));
    };

    let window = Settings::from_bounds(rmin, rmax, imin, imax, res);
    window.validate()?;
    let width = ((rmax - rmin) * res).round();
    let height = ((imax - imin) * res).round();
    if !(width >= 1.0 && height >= 1.0 && width <= u32::MAX as f64 && height <= u32::MAX as f64) {
        return Err(ZetaError::Config(format!(
            "requête '{line}': dimensions {width}x{height} invalides"
        )));
    }

    let mut params = base.clone();
    params.window = window;
    params.width = width as u32;
    params.height = height as u32;
    Ok(params)
}

/// Sert les requêtes de `input` jusqu'à la fin du flux ; renvoie le nombre
/// de rendus effectués.
pub fn serve<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    base: &RenderParams,
    luts: Option<ChainView<'_>>,
) -> Result<usize> {
    writeln!(output, "ready")?;
    output.flush()?;

    let mut served = 0usize;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let pixels = match parse_request(line, base).and_then(|params| render(&params, luts)) {
            Ok(pixels) => {
                served += 1;
                pixels
            }
            Err(e) => {
                warn!("requête ignorée: {e}");
                Vec::new()
            }
        };

        debug!(bytes = pixels.len(), "réponse");
        output.write_all(&(pixels.len() as u64).to_le_bytes())?;
        output.write_all(&pixels)?;
        output.flush()?;
    }
    Ok(served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_params;
    use std::io::Cursor;

    #[test]
    fn test_parse_request_dimensions() {
        let base = default_params(1, 1);
        let params = parse_request("-1 1 -0.5 0.5 4", &base).unwrap();
        assert_eq!((params.width, params.height), (8, 4));
        assert_eq!(params.window.res, 4.0);
        assert!(parse_request("1 2 3", &base).is_err());
        assert!(parse_request("1 0 0 1 10", &base).is_err());
        assert!(parse_request("0 1 0 1 0", &base).is_err());
    }

    #[test]
    fn test_serve_protocol() {
        let base = default_params(1, 1);
        let input = Cursor::new("0.5 1.0 10 10.5 4\n\nnot a request\n");
        let mut out = Vec::new();
        let served = serve(input, &mut out, &base, None).unwrap();
        assert_eq!(served, 1);

        assert!(out.starts_with(b"ready\n"));
        let body = &out[6..];
        let size = u64::from_le_bytes(body[..8].try_into().unwrap()) as usize;
        assert_eq!(size, 2 * 2 * 3);
        let pixels = &body[8..8 + size];
        let expected = render(&parse_request("0.5 1.0 10 10.5 4", &base).unwrap(), None).unwrap();
        assert_eq!(pixels, expected.as_slice());

        // Requête invalide : réponse vide
        let rest = &body[8 + size..];
        assert_eq!(rest, &0u64.to_le_bytes());
    }
}
