use std::io::BufRead;

/// Collect lines until end of stream.
///
/// A read error ends collection early. It is logged rather than returned so
/// that whatever was read before the failure still gets solved.
pub fn lines<R>(reader: R) -> Vec<String>
where
    R: BufRead,
{
    let mut lines = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(e) => {
                log::error!("reading standard input: {}", e);
                break;
            }
        }
    }
    log::debug!("read {} lines", lines.len());
    lines
}

/// Collect every line of standard input.
pub fn stdin() -> Vec<String> {
    lines(std::io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;
    use std::io::Cursor;
    use std::io::Read;

    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("pipe closed"))
        }
    }

    #[test]
    fn reads_until_eof() {
        let text = Cursor::new("jqt: rhn xhk\nxhk: hfx\n");
        assert_eq!(lines(text), vec!["jqt: rhn xhk", "xhk: hfx"]);
    }

    #[test]
    fn keeps_lines_before_error() {
        let reader = BufReader::new(Cursor::new("a: b\nc: d\n").chain(Broken));
        assert_eq!(lines(reader), vec!["a: b", "c: d"]);
    }

    #[test]
    fn empty_stream() {
        assert!(lines(Cursor::new("")).is_empty());
    }
}
