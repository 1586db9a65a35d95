use std_util::str;

/// A model name, split into lowercase words so it can be rendered in any case.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.upper_camel_case())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_cases() {
        let name = Name::new("UserProfile");
        assert_eq!(name.parts, ["user", "profile"]);
        assert_eq!(name.snake_case(), "user_profile");
        assert_eq!(name.upper_camel_case(), "UserProfile");
        assert_eq!(name.to_string(), "UserProfile");
    }

    #[test]
    fn blank_name_is_empty() {
        assert!(Name::new("").is_empty());
        assert!(Name::new("__").is_empty());
    }
}
