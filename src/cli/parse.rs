use super::CliFlags;
use cracktime::error::{Error, Result};

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--defaults" => flags.defaults = true,
            "--log" => {
                i += 1;
                match args.get(i) {
                    Some(path) if !path.starts_with('-') => flags.log = Some(path.clone()),
                    _ => return Err(Error::Flag("--log needs a file path".to_string())),
                }
            }
            arg => return Err(Error::Flag(format!("Unknown argument: {}", arg))),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("cracktime")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn test_all_flags() {
        let flags = parse(&args(&["-h", "--version", "--defaults", "--log", "out.log"])).unwrap();
        assert!(flags.help);
        assert!(flags.version);
        assert!(flags.defaults);
        assert_eq!(flags.log.as_deref(), Some("out.log"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&args(&["--log"])), Err(Error::Flag(_))));
        assert!(matches!(parse(&args(&["--log", "-h"])), Err(Error::Flag(_))));
        assert!(matches!(parse(&args(&["-l", "12"])), Err(Error::Flag(_))));
    }
}
