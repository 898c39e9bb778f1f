use std::io::{self, BufRead};

/// Field separator of the reference file
pub const DELIMITER: char = ',';

/// Number of logical fields per reference line
pub const FIELD_COUNT: usize = 5;

/// One data line of the reference file, fields trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub name: String,
    pub category: String,
    pub move_name: String,
    pub value: String,
    pub description: String,
}

/// Split a reference line into its five fields.
///
/// The split stops after the fourth delimiter, so any further commas stay
/// inside the description. There is no quoting: a comma in an earlier field
/// shifts every field after it. Returns `None` for lines yielding fewer than
/// five parts.
pub fn parse_record(line: &str) -> Option<CatalogRow> {
    let mut parts = line.splitn(FIELD_COUNT, DELIMITER).map(str::trim);

    let name = parts.next()?;
    let category = parts.next()?;
    let move_name = parts.next()?;
    let value = parts.next()?;
    let description = parts.next()?;

    Some(CatalogRow {
        name: name.to_string(),
        category: category.to_string(),
        move_name: move_name.to_string(),
        value: value.to_string(),
        description: description.to_string(),
    })
}

/// Read the next line into `buf` without its line ending.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns `false` once the
/// input is exhausted.
pub fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(!buf.is_empty());
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let ending = available[end];
                buf.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                if ending == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}
