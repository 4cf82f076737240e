use chrono::{DateTime, Utc};
use tillpoint_types::{Coupon, CouponDuration, Currency, DeleteResponse, List};

use super::encode_id;
use crate::{
    client::Client,
    error::Result,
    form::{Form, ListParams},
};

/// The discount a coupon grants: a percentage or a fixed amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponDiscount {
    /// Between 1 and 100
    PercentOff(u32),
    AmountOff { amount: u64, currency: Currency },
}

/// Fields for creating a coupon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponParams {
    /// Caller-chosen code; the API generates one when unset
    pub id: Option<String>,
    pub duration: CouponDuration,
    pub discount: CouponDiscount,
    /// Required when `duration` is repeating
    pub duration_in_months: Option<u32>,
    pub max_redemptions: Option<u32>,
    /// Last time the coupon can be redeemed
    pub redeem_by: Option<DateTime<Utc>>,
}

impl CouponParams {
    pub fn new(duration: CouponDuration, discount: CouponDiscount) -> Self {
        Self {
            id: None,
            duration,
            discount,
            duration_in_months: None,
            max_redemptions: None,
            redeem_by: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_duration_in_months(mut self, months: u32) -> Self {
        self.duration_in_months = Some(months);
        self
    }

    pub fn with_max_redemptions(mut self, max_redemptions: u32) -> Self {
        self.max_redemptions = Some(max_redemptions);
        self
    }

    pub fn with_redeem_by(mut self, redeem_by: DateTime<Utc>) -> Self {
        self.redeem_by = Some(redeem_by);
        self
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.push_str("id", self.id.as_deref())
            .push("duration", self.duration);
        match &self.discount {
            CouponDiscount::PercentOff(percent) => {
                form.push("percent_off", percent);
            }
            CouponDiscount::AmountOff { amount, currency } => {
                form.push("amount_off", amount).push("currency", currency);
            }
        }
        form.push_opt("duration_in_months", self.duration_in_months)
            .push_opt("max_redemptions", self.max_redemptions)
            .push_timestamp("redeem_by", self.redeem_by);
        form
    }
}

/// Discount coupons applied to customers
pub struct Coupons<'a> {
    client: &'a Client,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CouponParams) -> Result<Coupon> {
        self.client.post("/coupons", &params.to_form()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Coupon> {
        self.client
            .get(&format!("/coupons/{}", encode_id(id)), None)
            .await
    }

    /// Delete a coupon; customers who already redeemed it keep the discount
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let response: DeleteResponse = self
            .client
            .delete(&format!("/coupons/{}", encode_id(id)), None)
            .await?;
        Ok(response.deleted)
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Coupon>> {
        self.client.get("/coupons", Some(&params.to_form())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_off_form() {
        let form = CouponParams::new(CouponDuration::Repeating, CouponDiscount::PercentOff(25))
            .with_id("SPRING25")
            .with_duration_in_months(3)
            .to_form();
        assert_eq!(
            form.keys().collect::<Vec<_>>(),
            vec!["id", "duration", "percent_off", "duration_in_months"]
        );
        assert_eq!(form.get("duration"), Some("repeating"));
        assert_eq!(form.get("percent_off"), Some("25"));
    }

    #[test]
    fn test_amount_off_form() {
        let discount = CouponDiscount::AmountOff {
            amount: 500,
            currency: Currency::Jpy,
        };
        let form = CouponParams::new(CouponDuration::Once, discount)
            .with_max_redemptions(100)
            .to_form();
        assert_eq!(form.get("amount_off"), Some("500"));
        assert_eq!(form.get("currency"), Some("jpy"));
        assert_eq!(form.get("max_redemptions"), Some("100"));
        assert!(!form.contains_key("id"));
        assert!(!form.contains_key("percent_off"));
    }
}
