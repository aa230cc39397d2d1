use std::path::Path;

use eyespeak_common::{EyespeakError, Result};

use super::FrameRecord;

/// Read every frame from a JSON Lines file.
pub fn read_frames(path: &Path) -> Result<Vec<FrameRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let frames = parse_frames(&contents)?;
    tracing::info!("Loaded {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

/// Parse JSON Lines frame records. Blank lines and `#` comments are skipped.
pub fn parse_frames(contents: &str) -> Result<Vec<FrameRecord>> {
    let mut frames = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record: FrameRecord = serde_json::from_str(line)
            .map_err(|e| EyespeakError::Source(format!("line {}: {e}", number + 1)))?;
        if !record.t.is_finite() {
            return Err(EyespeakError::Source(format!(
                "line {}: timestamp is not a finite number",
                number + 1
            )));
        }
        frames.push(record);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_face_and_no_face_lines() {
        let input = r#"
{"t": 0, "landmarks": [[0.1, 0.2], [0.3, 0.4, -0.05]]}
{"t": 33.5, "landmarks": null}
{"t": 66}
"#;
        let frames = parse_frames(input).unwrap();
        assert_eq!(frames.len(), 3);

        let first = frames[0].landmarks.as_ref().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first.get(1).map(|p| (p.x, p.y)), Some((0.3, 0.4)));
        assert_eq!(frames[1].t, 33.5);
        assert!(frames[1].landmarks.is_none());
        assert!(frames[2].landmarks.is_none());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let frames = parse_frames("# recorded 2024\n\n{\"t\": 1, \"landmarks\": null}\n").unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn reports_line_number_on_bad_json() {
        let err = parse_frames("{\"t\": 0}\n{\"t\": }\n").unwrap_err();
        match err {
            EyespeakError::Source(msg) => assert!(msg.starts_with("line 2:"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_points_with_one_coordinate() {
        assert!(parse_frames("{\"t\": 0, \"landmarks\": [[0.5]]}").is_err());
    }

    #[test]
    fn read_frames_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"t\": 0, \"landmarks\": null}}").unwrap();
        writeln!(file, "{{\"t\": 40, \"landmarks\": [[0.5, 0.5]]}}").unwrap();

        let frames = read_frames(file.path()).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].t, 40.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_frames(Path::new("/nonexistent/eyespeak/frames.jsonl")).unwrap_err();
        assert!(matches!(err, EyespeakError::Io(_)));
    }
}
