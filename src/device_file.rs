use crate::error::ErrorBox;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

pub fn read(file: &mut File) -> Result<u64, ErrorBox> {
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    file.seek(SeekFrom::Start(0))?;
    Ok(content.trim().parse()?)
}

pub fn write(file: &mut File, value: u64) -> Result<(), ErrorBox> {
    file.write_all(value.to_string().as_bytes())?;
    file.seek(SeekFrom::Start(0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::fs::OpenOptions;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "camlux-device-file-{}-{}",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_parses_and_ignores_trailing_newline() -> Result<(), ErrorBox> {
        let path = temp_file("read", "42\n");
        let mut file = File::open(&path)?;

        assert_eq!(42, read(&mut file)?);
        Ok(())
    }

    #[test]
    fn test_read_rewinds_so_the_same_handle_can_be_reread() -> Result<(), ErrorBox> {
        let path = temp_file("reread", "137\n");
        let mut file = File::open(&path)?;

        assert_eq!(137, read(&mut file)?);
        assert_eq!(137, read(&mut file)?);
        Ok(())
    }

    #[test]
    fn test_write_then_read_roundtrips_on_the_same_handle() -> Result<(), ErrorBox> {
        let path = temp_file("write", "42\n");
        let mut file = OpenOptions::new().read(true).write(true).open(&path)?;

        write(&mut file, 87)?;

        assert_eq!(87, read(&mut file)?);
        Ok(())
    }

    #[test]
    fn test_read_fails_on_non_numeric_content() -> Result<(), ErrorBox> {
        let path = temp_file("garbage", "not-a-number\n");
        let mut file = File::open(&path)?;

        assert_eq!(true, read(&mut file).is_err());
        Ok(())
    }
}
