// Dashboard domain model
use super::camera::{CameraFeed, CameraFeeds, CameraPosition};
use serde::Deserialize;

/// Payload of the image refresh endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageUpdate {
    #[serde(rename = "updatedFLURL")]
    pub front_left_image: String,
    #[serde(rename = "updatedFRURL")]
    pub front_right_image: String,
    #[serde(rename = "updatedBLURL")]
    pub back_left_image: String,
    #[serde(rename = "updatedBRURL")]
    pub back_right_image: String,
    #[serde(rename = "flMask")]
    pub front_left_mask: String,
    #[serde(rename = "frMask")]
    pub front_right_mask: String,
    #[serde(rename = "blMask")]
    pub back_left_mask: String,
    #[serde(rename = "brMask")]
    pub back_right_mask: String,
}

impl ImageUpdate {
    pub fn into_feeds(self) -> CameraFeeds {
        CameraFeeds::new(
            CameraFeed::new(self.front_left_image, self.front_left_mask),
            CameraFeed::new(self.front_right_image, self.front_right_mask),
            CameraFeed::new(self.back_left_image, self.back_left_mask),
            CameraFeed::new(self.back_right_image, self.back_right_mask),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub feeds: CameraFeeds,
    pub elapsed_seconds: u64,
}

impl DashboardState {
    pub fn new(placeholder_image: &str) -> Self {
        Self {
            feeds: CameraFeeds::placeholder(placeholder_image),
            elapsed_seconds: 0,
        }
    }

    pub fn image(&self, position: CameraPosition) -> &str {
        &self.feeds.get(position).image
    }

    pub fn mask(&self, position: CameraPosition) -> &str {
        &self.feeds.get(position).mask
    }

    /// Replace all eight URLs, whatever they held before
    pub fn apply_update(&mut self, update: ImageUpdate) {
        self.feeds = update.into_feeds();
    }

    pub fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }
}
