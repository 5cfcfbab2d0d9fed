//! Builders for in-memory document packages used across module tests.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::docx::BODY_MEMBER;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

/// Zip arbitrary members into an archive.
pub fn zip_with(members: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in members {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A minimal document package around the given body markup.
pub fn docx_bytes(body_xml: &str) -> Vec<u8> {
    zip_with(&[("[Content_Types].xml", CONTENT_TYPES), (BODY_MEMBER, body_xml)])
}

pub fn docx_from_fixture(name: &str) -> Vec<u8> {
    let xml = std::fs::read_to_string(format!("tests/fixtures/{}.xml", name)).unwrap();
    docx_bytes(&xml)
}

/// Body markup with one paragraph per entry, each split into the given runs.
pub fn document_xml(paragraphs: &[&[&str]]) -> String {
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for runs in paragraphs {
        out.push_str("<w:p>");
        for run in runs.iter() {
            out.push_str(&format!(
                r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
                run
            ));
        }
        out.push_str("</w:p>");
    }
    out.push_str("<w:sectPr/></w:body></w:document>");
    out
}

/// Write a package under `dir` and return its path.
pub fn write_docx(dir: &Path, file_name: &str, body_xml: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, docx_bytes(body_xml)).unwrap();
    path
}

/// A stored, single-member ZIP64 package whose headers declare `declared_size`
/// uncompressed bytes while holding only `body`.
pub fn docx_declaring_size(body_xml: &str, declared_size: u64) -> Vec<u8> {
    let name = BODY_MEMBER.as_bytes();
    let data = body_xml.as_bytes();
    let crc = crc32(data);
    // 2024-01-01 00:00 in MS-DOS date/time fields.
    let (time, date) = (0u16, (44u16 << 9) | (1 << 5) | 1);

    let mut extra = Vec::new();
    extra.extend_from_slice(&1u16.to_le_bytes());
    extra.extend_from_slice(&16u16.to_le_bytes());
    extra.extend_from_slice(&declared_size.to_le_bytes());
    extra.extend_from_slice(&(data.len() as u64).to_le_bytes());

    let mut out = Vec::new();
    out.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
    out.extend_from_slice(&45u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&time.to_le_bytes());
    out.extend_from_slice(&date.to_le_bytes());
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out.extend_from_slice(&(name.len() as u16).to_le_bytes());
    out.extend_from_slice(&(extra.len() as u16).to_le_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(&extra);
    out.extend_from_slice(data);

    let central_start = out.len();
    out.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
    out.extend_from_slice(&45u16.to_le_bytes());
    out.extend_from_slice(&45u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&time.to_le_bytes());
    out.extend_from_slice(&date.to_le_bytes());
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out.extend_from_slice(&(name.len() as u16).to_le_bytes());
    out.extend_from_slice(&(extra.len() as u16).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // comment
    out.extend_from_slice(&0u16.to_le_bytes()); // disk
    out.extend_from_slice(&0u16.to_le_bytes()); // internal attrs
    out.extend_from_slice(&0u32.to_le_bytes()); // external attrs
    out.extend_from_slice(&0u32.to_le_bytes()); // local header offset
    out.extend_from_slice(name);
    out.extend_from_slice(&extra);
    let central_len = out.len() - central_start;

    out.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&(central_len as u32).to_le_bytes());
    out.extend_from_slice(&(central_start as u32).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out
}

/// A deflated package whose body member's compressed stream has been
/// overwritten partway through.
pub fn docx_with_damaged_body(body_xml: &str) -> Vec<u8> {
    let mut bytes = zip_with(&[(BODY_MEMBER, body_xml)]);
    let name_len = u16::from_le_bytes([bytes[26], bytes[27]]) as usize;
    let extra_len = u16::from_le_bytes([bytes[28], bytes[29]]) as usize;
    let data_start = 30 + name_len + extra_len;
    for b in &mut bytes[data_start + 8..data_start + 24] {
        *b = 0xFF;
    }
    bytes
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}
