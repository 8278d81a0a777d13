// Camera domain model

/// Mounting position of a camera on the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPosition {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl CameraPosition {
    /// All positions in display order (front row first, left to right)
    pub const ALL: [CameraPosition; 4] = [
        CameraPosition::FrontLeft,
        CameraPosition::FrontRight,
        CameraPosition::BackLeft,
        CameraPosition::BackRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CameraPosition::FrontLeft => "Front Left",
            CameraPosition::FrontRight => "Front Right",
            CameraPosition::BackLeft => "Back Left",
            CameraPosition::BackRight => "Back Right",
        }
    }

    fn index(&self) -> usize {
        match self {
            CameraPosition::FrontLeft => 0,
            CameraPosition::FrontRight => 1,
            CameraPosition::BackLeft => 2,
            CameraPosition::BackRight => 3,
        }
    }
}

/// Latest camera frame and mask overlay URLs for one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFeed {
    pub image: String,
    pub mask: String,
}

impl CameraFeed {
    pub fn new(image: String, mask: String) -> Self {
        Self { image, mask }
    }

    /// Both URLs pointing at the same placeholder
    pub fn placeholder(url: &str) -> Self {
        Self::new(url.to_string(), url.to_string())
    }
}

/// One feed per camera position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFeeds([CameraFeed; 4]);

impl CameraFeeds {
    pub fn new(
        front_left: CameraFeed,
        front_right: CameraFeed,
        back_left: CameraFeed,
        back_right: CameraFeed,
    ) -> Self {
        Self([front_left, front_right, back_left, back_right])
    }

    pub fn placeholder(url: &str) -> Self {
        Self(std::array::from_fn(|_| CameraFeed::placeholder(url)))
    }

    pub fn get(&self, position: CameraPosition) -> &CameraFeed {
        &self.0[position.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraPosition, &CameraFeed)> {
        CameraPosition::ALL.into_iter().zip(self.0.iter())
    }
}
