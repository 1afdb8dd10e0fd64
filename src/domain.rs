//! Game-domain enums that configuration names by keyword.
//!
//! Keywords are matched exactly (case-sensitive). Unknown keywords leave the
//! caller's default in place; see [`crate::accessors::get_keyword_key`].

/// A closed set of values spelled as strings in configuration.
pub trait Keyword: Sized + Copy {
    fn from_keyword(s: &str) -> Option<Self>;
}

/// How an animation advances once it reaches its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    #[default]
    Looped,
    PlayOnce,
    BackAndForth,
}

impl Keyword for AnimationType {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "looped" => Some(Self::Looped),
            "playOnce" => Some(Self::PlayOnce),
            "backAndForth" => Some(Self::BackAndForth),
            _ => None,
        }
    }
}

/// Facing of a character, clockwise from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerDirection {
    #[default]
    Front,
    FrontLeft,
    Left,
    BackLeft,
    Back,
    BackRight,
    Right,
    FrontRight,
    /// Every direction, for animations that do not turn
    All,
}

impl Keyword for PlayerDirection {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "front" => Some(Self::Front),
            "frontLeft" => Some(Self::FrontLeft),
            "left" => Some(Self::Left),
            "backLeft" => Some(Self::BackLeft),
            "back" => Some(Self::Back),
            "backRight" => Some(Self::BackRight),
            "right" => Some(Self::Right),
            "frontRight" => Some(Self::FrontRight),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerInventory {
    #[default]
    Body,
    Belt,
    Stash,
}

impl Keyword for PlayerInventory {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "body" => Some(Self::Body),
            "belt" => Some(Self::Belt),
            "stash" => Some(Self::Stash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Stand,
    Walk,
    Attack,
    Hit,
    Dead,
}

impl Keyword for PlayerStatus {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "stand" => Some(Self::Stand),
            "walk" => Some(Self::Walk),
            "attack" => Some(Self::Attack),
            "hit" => Some(Self::Hit),
            "dead" => Some(Self::Dead),
            _ => None,
        }
    }
}
