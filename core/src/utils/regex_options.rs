use super::error::CaseworkError;
use log::error;
use regex::Regex;

/// Create a compiled Regex
pub(crate) fn create_regex(input: &str) -> Result<Regex, CaseworkError> {
    let regex_result = Regex::new(input);
    let regex = match regex_result {
        Ok(result) => result,
        Err(err) => {
            error!("[casework] Bad regex {input}, error: {err:?}");
            return Err(CaseworkError::Regex);
        }
    };

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use crate::utils::regex_options::create_regex;

    #[test]
    fn test_create_regex() {
        let reg = String::from(r".*");
        let regex = create_regex(&reg).unwrap();
        assert_eq!(regex.as_str(), ".*");
    }

    #[test]
    #[should_panic(expected = "Regex")]
    fn test_create_bad_regex() {
        let reg = String::from(r"[");
        let _ = create_regex(&reg).unwrap();
    }
}
