#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event_type")]
pub enum GAuthEvent {
    Enrolled {
        account_id: String,
    },
    Verified {
        account_id: String,
    },
    VerificationFailed {
        account_id: String,
        remaining_attempts: u8,
    },
    LockedOut {
        account_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::GAuthEvent;

    #[test]
    fn it_tags_events() {
        assert_eq!(
            serde_json::to_value(GAuthEvent::VerificationFailed {
                account_id: "account".into(),
                remaining_attempts: 2,
            })
            .unwrap(),
            json!({
                "event_type": "VerificationFailed",
                "account_id": "account",
                "remaining_attempts": 2
            })
        );
    }
}
