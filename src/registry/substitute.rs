// src/registry/substitute.rs

/// Token replaced by the matched file path in a command template.
pub const PLACEHOLDER: &str = "$SPYRUN_FILE";

/// Replace every occurrence of [`PLACEHOLDER`] in `template` with `file`.
///
/// Single pass, literal match. The path is inserted verbatim with no quoting;
/// the shell that runs the command interprets the result.
pub fn substitute(template: &str, file: &str) -> String {
    template.replace(PLACEHOLDER, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let cmd = substitute("cp $SPYRUN_FILE $SPYRUN_FILE.bak", "src/a.txt");
        assert_eq!(cmd, "cp src/a.txt src/a.txt.bak");
    }

    #[test]
    fn template_without_token_is_unchanged() {
        assert_eq!(substitute("make all", "src/a.txt"), "make all");
    }

    #[test]
    fn token_embedded_in_words_is_still_replaced() {
        let cmd = substitute("echo [$SPYRUN_FILE]", "x");
        assert_eq!(cmd, "echo [x]");
    }

    #[test]
    fn inserted_path_is_not_rescanned() {
        // A path that itself spells the token stays as-is after one pass.
        let cmd = substitute("echo $SPYRUN_FILE", "$SPYRUN_FILE");
        assert_eq!(cmd, "echo $SPYRUN_FILE");
    }
}
