use chrono::{DateTime, Utc};

/// A sponsorship note left by a supporter
#[derive(Debug, Clone, PartialEq)]
pub struct Sponsor {
    pub id: String,
    pub donor_name: String,
    pub message: Option<String>,
    /// Always positive when present
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSponsor {
    pub donor_name: String,
    pub message: Option<String>,
    pub amount: Option<f64>,
}

impl NewSponsor {
    pub fn into_sponsor(self, id: String, created_at: DateTime<Utc>) -> Sponsor {
        Sponsor {
            id,
            donor_name: self.donor_name,
            message: self.message,
            amount: self.amount,
            created_at,
        }
    }
}
