use std::io::{Cursor, Read};
use std::path::Path;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use super::DocumentReader;
use crate::error::ReadError;

const DOCUMENT_XML: &str = "word/document.xml";

/// .docx 读取器
///
/// 解压 `word/document.xml`，按段落（`w:p`）提取文本，段落之间用换行连接。
pub struct DocxReader;

#[async_trait]
impl DocumentReader for DocxReader {
    async fn read(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::io(path, e))?;
        let mut archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(|e| ReadError::docx(path, e))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| ReadError::docx(path, e))?
            .read_to_string(&mut xml)
            .map_err(|e| ReadError::docx(path, e))?;

        let text = paragraphs_text(&xml).map_err(|e| ReadError::docx(path, e))?;
        debug!("docx 提取完成: {} ({} 字符)", path.display(), text.len());
        Ok(text)
    }
}

/// 文本框、绘图等嵌入内容，不属于所在段落的正文
const EMBEDDED_TAGS: [&[u8]; 4] = [
    b"mc:AlternateContent",
    b"w:txbxContent",
    b"w:drawing",
    b"w:pict",
];

/// 从 document.xml 中提取段落文本
///
/// 只取正文段落中各 run 的文字；嵌入内容整体跳过，嵌套段落不会打断外层段落。
fn paragraphs_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut para_depth = 0usize;
    let mut skip_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                if EMBEDDED_TAGS.contains(&name.as_ref()) {
                    skip_depth += 1;
                } else if skip_depth == 0 {
                    match name.as_ref() {
                        b"w:p" => {
                            para_depth += 1;
                            if para_depth == 1 {
                                current.clear();
                            }
                        }
                        b"w:t" => in_text = true,
                        _ => {}
                    }
                }
            }
            Event::Empty(e) if skip_depth == 0 => match e.name().as_ref() {
                b"w:p" if para_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && skip_depth == 0 => current.push_str(&t.unescape()?),
            Event::End(e) => {
                let name = e.name();
                if EMBEDDED_TAGS.contains(&name.as_ref()) {
                    skip_depth = skip_depth.saturating_sub(1);
                } else if skip_depth == 0 {
                    match name.as_ref() {
                        b"w:p" => {
                            if para_depth == 1 {
                                paragraphs.push(std::mem::take(&mut current));
                            }
                            para_depth = para_depth.saturating_sub(1);
                        }
                        b"w:t" => in_text = false,
                        _ => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
