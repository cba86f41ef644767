use crate::models::Secret;

impl Secret {
    pub fn new(secret: String) -> Secret {
        Secret(secret)
    }

    /// Whether there is no secret material
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for Secret {
    fn from(secret: String) -> Secret {
        Secret::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Secret;

    #[test]
    fn it_redacts_debug_output() {
        let secret = Secret::new("JBSWY3DPEHPK3PXP".into());
        assert_eq!(format!("{:?}", secret), "Secret(\"XXXXXXXXXXXXXXXX\")");
    }

    #[test]
    fn it_serialises_as_plain_string() {
        let secret = Secret::from("JBSWY3DPEHPK3PXP".to_string());
        assert_eq!(
            serde_json::to_value(&secret).unwrap(),
            json!("JBSWY3DPEHPK3PXP")
        );
    }
}
