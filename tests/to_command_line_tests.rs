//! Integration tests for to-command-line output

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use argtable::ParsedArgs;
    use argtable::operations::{OutputFormat, generate_command_line, to_tokens};
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn tokens_reparse_to_same_table() {
        let lines = [
            "-ADC",
            "-ADC=0 -noADC=0",
            "--noADC=0 -bar=NaN -baz=",
            "-opt=a=b -addnode=1 -addnode=2",
            "- ---x=1 -no",
            "-nonoADC",
            "-nonoADC=0",
            "-nonoADC -ADC=5 -nononoBAR",
        ];
        for line in lines {
            let parsed = ParsedArgs::from_line(line);
            let reparsed = ParsedArgs::parse(to_tokens(&parsed));
            assert_eq!(reparsed.table(), parsed.table(), "line: {line:?}");
        }
    }

    #[test]
    fn spaces_in_values_are_quoted() {
        let parsed = ParsedArgs::parse(["-name=two words"]);
        let output = generate_command_line(&parsed, OutputFormat::Shell).unwrap();
        assert_eq!(output, "'-name=two words'");
    }

    #[cfg(unix)]
    #[test]
    fn shell_output_survives_sh() {
        let tokens = [
            "-msg=hi!",
            "-pass=has$dollar",
            r#"-q=say "hi""#,
            "-apos=it's",
            r"-path=C:\temp",
            "-name=two words",
            "-tick=`id`",
            "-empty=",
        ];
        let parsed = ParsedArgs::parse(tokens);
        let shell = generate_command_line(&parsed, OutputFormat::Shell).unwrap();

        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!("printf '%s\\n' {shell}"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let printed = String::from_utf8(output.stdout).unwrap();
        let words: Vec<&str> = printed.lines().collect();
        assert_eq!(words, to_tokens(&parsed));
        assert_eq!(ParsedArgs::parse(words).table(), parsed.table());
    }

    #[test]
    fn to_command_line_basic() {
        let mut cmd = Command::cargo_bin("argtable").unwrap();
        cmd.arg("--to-command-line")
            .arg("--")
            .arg("-noADC")
            .arg("--datadir=/tmp/node")
            .assert()
            .success()
            .stdout(predicate::str::contains("-ADC=0"))
            .stdout(predicate::str::contains("-datadir=/tmp/node"))
            .stdout(predicate::str::contains("-noADC").not());
    }

    #[test]
    fn to_command_line_json_format() {
        let mut cmd = Command::cargo_bin("argtable").unwrap();
        let output = cmd
            .arg("--to-command-line")
            .arg("--output-format")
            .arg("json")
            .arg("--")
            .arg("-ADC")
            .arg("-noADC")
            .arg("-bar=1")
            .assert()
            .success();

        let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
        let json: Vec<String> = serde_json::from_str(&stdout).unwrap();

        assert_eq!(json, vec!["-ADC".to_owned(), "-bar=1".to_owned()]);
    }

    #[test]
    fn to_command_line_invalid_format() {
        let mut cmd = Command::cargo_bin("argtable").unwrap();
        cmd.arg("--to-command-line")
            .arg("--output-format")
            .arg("xml")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid format"));
    }
}
