use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a shader source file into a single string.
///
/// Each line of the file is prefixed with a newline separator and the result
/// carries a trailing NUL sentinel, so a file of N lines loads as exactly N
/// newline-prefixed segments plus `'\0'`. The sentinel never reaches the GL
/// compiler; see `ShaderProgram`.
///
/// A file that cannot be opened loads as the empty string. The failure is
/// logged but not surfaced to the caller; downstream compilation reports the
/// resulting empty source through its own diagnostics.
pub fn load_shader_source<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("failed to open shader source {}: {e}", path.display());
            return String::new();
        }
    };

    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                text.push('\n');
                text.push_str(&line);
            }
            // Undecodable byte mid-file: keep what was read so far.
            Err(e) => {
                log::warn!("failed to read shader source {}: {e}", path.display());
                break;
            }
        }
    }

    text.push('\0');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn n_lines_load_as_n_newline_prefixed_segments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#version 330 core\nvoid main() {{}}\n").unwrap();

        let text = load_shader_source(file.path());

        assert_eq!(text, "\n#version 330 core\nvoid main() {}\0");
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with('\0'));
    }

    #[test]
    fn segment_count_is_independent_of_line_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\n\nwhatever // trailing").unwrap();

        let text = load_shader_source(file.path());

        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.ends_with('\0'));
    }

    #[test]
    fn empty_file_loads_as_bare_sentinel() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(load_shader_source(file.path()), "\0");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let text = load_shader_source(dir.path().join("nope.vert"));
        assert!(text.is_empty());
    }
}
