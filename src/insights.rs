use crate::client::Client;
use crate::error::Error;
use crate::models::Insight;
use std::collections::HashMap;

/// Read-only operations on insights (security findings/rules).
///
/// A non-owning view over a shared [`Client`]; obtain one with
/// [`Client::insights`].
pub struct InsightsClient<'a> {
    pub(crate) client: &'a Client,
}

impl InsightsClient<'_> {
    /// List all insights, in server-returned order.
    pub fn list(&self) -> Result<Vec<Insight>, Error> {
        let resp = self.client.get(&["v2", "public", "insights", "list"])?;
        self.client.expect_ok_json(resp)
    }

    /// Fetch a single insight by id and source. The source is an opaque
    /// label selecting which cloud/account dataset the insight was computed
    /// against.
    pub fn get(&self, insight_id: i64, source: &str) -> Result<Insight, Error> {
        let id = insight_id.to_string();
        let resp = self
            .client
            .get(&["v2", "public", "insights", &id, source])?;
        self.client.expect_ok_json(resp)
    }

    /// Rolling 7-day trend for an insight, as a date-label to count mapping.
    /// Iteration order over the map is unspecified; sort the keys if you
    /// need chronological order.
    pub fn seven_day_trend(
        &self,
        insight_id: i64,
        source: &str,
    ) -> Result<HashMap<String, i64>, Error> {
        let id = insight_id.to_string();
        let resp = self.client.get(&[
            "v2",
            "public",
            "insights",
            &id,
            source,
            "insight-data-7-days",
        ])?;
        self.client.expect_ok_json(resp)
    }
}
