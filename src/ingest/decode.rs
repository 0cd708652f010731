use encoding_rs::Encoding;

use crate::error::{BlockKind, MarmosetError, MarmosetResult};

/// Decodes a block strictly; malformed byte sequences are an error, never replaced.
pub(crate) fn decode_block(
    bytes: &[u8],
    encoding: &'static Encoding,
    block: BlockKind,
) -> MarmosetResult<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(MarmosetError::DecodeError {
            block,
            encoding: encoding.name(),
        })
}

/// Splits decoded text on line terminators.
///
/// CRLF is the exporter's terminator; a bare LF is accepted too. A terminator
/// at the very end yields a final empty line, like `str::split` does.
pub(crate) fn block_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::{block_lines, decode_block};
    use crate::error::{BlockKind, MarmosetError};

    #[test]
    fn shift_jis_bytes_decode_to_unicode() {
        // "あい" in Shift_JIS.
        let bytes = [0x82, 0xA0, 0x82, 0xA2];
        let text = decode_block(&bytes, encoding_rs::SHIFT_JIS, BlockKind::Metadata)
            .expect("decode");
        assert_eq!(text, "あい");
    }

    #[test]
    fn truncated_double_byte_sequence_is_rejected() {
        let err = decode_block(&[0x41, 0x8E], encoding_rs::SHIFT_JIS, BlockKind::Data)
            .expect_err("lead byte without trail must fail");
        assert!(matches!(
            err,
            MarmosetError::DecodeError {
                block: BlockKind::Data,
                ..
            }
        ));
    }

    #[test]
    fn lines_accept_crlf_and_lf() {
        let lines: Vec<&str> = block_lines("a,b\r\nc,d\ne\r\n").collect();
        assert_eq!(lines, vec!["a,b", "c,d", "e", ""]);
    }
}
