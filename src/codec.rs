// src/codec.rs

//! The compress and decompress drivers over complete archives.
//!
//! Archive layout: a 32-bit magic word, the pre-order tree header, then the
//! payload codes terminated by exactly one end-of-stream code. There is no
//! length field and no checksum; the sentinel code is the only terminator.

use crate::bitstream::{BitReader, BitWriter};
use crate::huffman::{build_tree, header, CodeTable, FrequencyTable, HuffNode, Symbol};
use crate::utils::error::{HuffError, Result};
use log::{debug, trace};
use std::io::{Read, Seek, SeekFrom, Write};

/// Marker identifying a huffpack archive; the first 32 bits of every
/// stream this crate writes.
pub const MAGIC: u32 = 0xFACE_8201;

const READ_CHUNK: usize = 8 * 1024;

/// Compresses `input` into a huffpack archive on `output`.
///
/// The input is read twice, once to count byte frequencies and once to
/// emit codes, so it must be seekable; the second pass rewinds to wherever
/// the stream stood when the call began. The output is flushed (with the
/// trailing partial byte zero-filled) before returning.
pub fn compress<R: Read + Seek, W: Write>(input: &mut R, output: W) -> Result<W> {
    let start = input.stream_position()?;

    let frequencies = FrequencyTable::from_reader(input)?;
    let root = build_tree(&frequencies);
    let codes = CodeTable::from_tree(&root)?;
    debug!(
        "counted {} bytes, {} distinct symbols",
        frequencies.total_bytes(),
        codes.len()
    );

    let mut writer = BitWriter::new(output);
    writer.write_bits(MAGIC, 32)?;
    header::write_tree(&root, &mut writer)?;
    trace!("header complete after {} bits", writer.bits_written());

    input.seek(SeekFrom::Start(start))?;
    write_payload(input, &codes, &mut writer)?;

    let total_bits = writer.bits_written();
    debug!(
        "wrote {} bits ({} bytes on disk)",
        total_bits,
        total_bits.div_ceil(8)
    );
    writer.finish()
}

/// Second pass: every input byte becomes its code, and the end-of-stream
/// code goes out exactly once after the last byte. A byte without a code
/// would mean the counting pass missed it; that must fail loudly rather
/// than corrupt the stream by writing nothing.
fn write_payload<R: Read, W: Write>(
    input: &mut R,
    codes: &CodeTable,
    writer: &mut BitWriter<W>,
) -> Result<()> {
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = input.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        for &byte in &chunk[..n] {
            let symbol = Symbol::Byte(byte);
            let code = codes
                .get(symbol)
                .ok_or(HuffError::MissingCode(symbol.index() as u16))?;
            writer.write_code(&code)?;
        }
    }
    let end = codes
        .get(Symbol::EndOfStream)
        .ok_or(HuffError::MissingCode(Symbol::EndOfStream.index() as u16))?;
    writer.write_code(&end)
}

/// Decompresses a huffpack archive from `input` onto `output`, flushing
/// the output before returning.
pub fn decompress<R: Read, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut reader = BitReader::new(input);

    let found = reader.read_bits(32)?.ok_or(HuffError::TruncatedHeader)?;
    if found != MAGIC {
        return Err(HuffError::BadMagic {
            expected: MAGIC,
            found,
        });
    }

    let root = header::read_tree(&mut reader)?;
    trace!("tree header parsed after {} bits", reader.bits_read());

    let written = read_payload(&root, &mut reader, output)?;
    debug!("decoded {} bytes from {} bits", written, reader.bits_read());
    output.flush()?;
    Ok(())
}

/// Walks the tree one bit at a time: `0` descends left, `1` descends
/// right; a leaf emits its byte and resets the cursor. The end-of-stream
/// leaf is the only valid way out of the loop, so bit exhaustion before it
/// means the archive was cut short. A lone-leaf tree has no descents; one
/// bit is still consumed per symbol, mirroring the encoder's 1-bit
/// convention for that shape.
fn read_payload<R: Read, W: Write>(
    root: &HuffNode,
    reader: &mut BitReader<R>,
    output: &mut W,
) -> Result<u64> {
    let mut written = 0u64;
    let mut cursor = root;
    loop {
        let bit = reader.read_bit()?.ok_or(HuffError::TruncatedPayload)?;
        if let HuffNode::Internal { left, right } = cursor {
            cursor = if bit { right } else { left };
        }
        if let HuffNode::Leaf { symbol } = cursor {
            match symbol {
                Symbol::EndOfStream => return Ok(written),
                Symbol::Byte(byte) => {
                    output.write_all(&[*byte])?;
                    written += 1;
                    cursor = root;
                }
            }
        }
    }
}

/// Compresses a byte slice into a fresh archive.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = std::io::Cursor::new(data);
    compress(&mut input, Vec::new())
}

/// Decompresses an archive held in memory.
pub fn decompress_bytes(archive: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress(std::io::Cursor::new(archive), &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_starts_with_the_magic_word() {
        let archive = compress_bytes(b"AAAB").unwrap();
        assert_eq!(&archive[..4], &MAGIC.to_be_bytes());
    }

    #[test]
    fn three_a_one_b_payload_bits() {
        // Codes under the documented tie-break: 'A' = 1, 'B' = 00, end
        // marker = 01. Payload for AAAB: 1 1 1 00 01.
        let archive = compress_bytes(b"AAAB").unwrap();
        // Header: magic (32 bits) then the five-node tree: 0 0 1+B 1+EOF 1+A
        // = 2 + 3 * 10 = 32 bits, so the payload starts byte-aligned at
        // offset 8.
        assert_eq!(archive.len(), 9);
        assert_eq!(archive[8], 0b1110_0010);
    }

    #[test]
    fn rejects_wrong_magic() {
        let mut archive = compress_bytes(b"hello").unwrap();
        archive[0] ^= 0x01;
        let err = decompress_bytes(&archive).unwrap_err();
        assert!(matches!(err, HuffError::BadMagic { .. }));
    }

    #[test]
    fn compress_resumes_from_the_current_position() {
        let mut input = std::io::Cursor::new(b"skip!payload".to_vec());
        input.set_position(5);
        let archive = compress(&mut input, Vec::new()).unwrap();
        assert_eq!(decompress_bytes(&archive).unwrap(), b"payload");
    }
}
