//! Command line entry point. Fetches the price points for one product
//! listing and prints the raw response body to standard output.
//!
//! The process always exits 0; transport failures are reported on standard
//! error instead of through the exit status.

use std::io::{self, Write};

/// The product listing to look up.
const PRODUCT_ID: u32 = 610510;

fn main() {
    env_logger::init();

    match pricefetch::get(&pricefetch::pricepoints_url(PRODUCT_ID)) {
        Ok(response) => {
            if let Err(e) = print_body(&mut io::stdout().lock(), response.body()) {
                log::warn!("failed writing response body to stdout: {}", e);
            }
        }
        Err(e) => eprintln!("cURL error: {}", e),
    }
}

/// Write the response body to the given writer, exactly as received.
fn print_body(writer: &mut impl Write, body: &[u8]) -> io::Result<()> {
    writer.write_all(b"Response:\n")?;
    writer.write_all(body)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    #[test]
    fn body_is_framed_verbatim() {
        let mut out = Vec::new();

        super::print_body(&mut out, br#"[{"marketPrice":1.23}]"#).unwrap();

        assert_eq!(out, b"Response:\n[{\"marketPrice\":1.23}]\n");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut out = Vec::new();

        super::print_body(&mut out, &[0u8, 159, 146, 150]).unwrap();

        assert_eq!(out[10..14], [0u8, 159, 146, 150]);
    }
}
