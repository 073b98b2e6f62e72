use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    operands: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn with_value(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "config".to_string(),
            Flag::with_value("-c", "--config", "Read startup commands from FILE"),
        );
        flags.insert(
            "norc".to_string(),
            Flag::switch("-n", "--norc", "Do not read a startup file"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Disable log output"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Enable debug output"),
        );

        Flags {
            flags,
            operands: Vec::new(),
        }
    }

    /// Parses command-line arguments, program name excluded. The first
    /// argument not starting with `-` and everything after it are operands.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if !arg.starts_with('-') || arg == "-" {
                self.operands.push(arg.clone());
                self.operands.extend(iter.by_ref().cloned());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = iter.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    /// Script file to run instead of reading standard input.
    pub fn script(&self) -> Option<&String> {
        self.operands.first()
    }

    pub fn print_help(&self) {
        println!("Usage: myshell [OPTIONS] [SCRIPT]");
        println!("\nOptions:");

        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            let long = if flag.takes_value {
                format!("{} FILE", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<15} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_switches() {
        let flags = parse(&["-q", "--debug", "-n"]).unwrap();
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("norc"));
        assert!(!flags.is_set("help"));
        assert!(flags.script().is_none());
    }

    #[test]
    fn test_config_value() {
        let flags = parse(&["--config", "/tmp/rc"]).unwrap();
        assert_eq!(flags.get_value("config").map(String::as_str), Some("/tmp/rc"));
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(parse(&["-c"]), Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(parse(&["--bogus"]), Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_script_operand_stops_parsing() {
        let flags = parse(&["-d", "script.sh", "-q"]).unwrap();
        assert_eq!(flags.script().map(String::as_str), Some("script.sh"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("quiet"));
    }
}
