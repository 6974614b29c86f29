//! Terminal pairing code for the companion app

use qrcode::render::unicode::Dense1x2;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Render `payload` as a QR code made of half-block characters
pub fn render(payload: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

/// Print the pairing code for `payload` to stdout
pub fn display(payload: &str) -> Result<(), QrError> {
    println!("{}", render(payload)?);
    Ok(())
}
