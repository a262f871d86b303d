use serde::{Deserialize, Serialize};

/// The sixteen discrete shot types the engine can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Layup,
    Dunk,
    Floater,
    HookShot,
    PostFade,
    MidRangePullUp,
    MidRangeCatchAndShoot,
    ThreePointCatchAndShoot,
    ThreePointPullUp,
    ThreePointCorner,
    ThreePointStepBack,
    ThreePointDeep,
    FreeThrow,
    AlleyOop,
    Putback,
    TipIn,
}

/// Which shooting rating drives a shot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotSkill {
    Inside,
    MidRange,
    ThreePoint,
    FreeThrow,
}

impl ShotType {
    pub const ALL: [ShotType; 16] = [
        ShotType::Layup,
        ShotType::Dunk,
        ShotType::Floater,
        ShotType::HookShot,
        ShotType::PostFade,
        ShotType::MidRangePullUp,
        ShotType::MidRangeCatchAndShoot,
        ShotType::ThreePointCatchAndShoot,
        ShotType::ThreePointPullUp,
        ShotType::ThreePointCorner,
        ShotType::ThreePointStepBack,
        ShotType::ThreePointDeep,
        ShotType::FreeThrow,
        ShotType::AlleyOop,
        ShotType::Putback,
        ShotType::TipIn,
    ];

    pub fn is_three(self) -> bool {
        matches!(
            self,
            ShotType::ThreePointCatchAndShoot
                | ShotType::ThreePointPullUp
                | ShotType::ThreePointCorner
                | ShotType::ThreePointStepBack
                | ShotType::ThreePointDeep
        )
    }

    pub fn is_free_throw(self) -> bool {
        self == ShotType::FreeThrow
    }

    /// Points for a make: 3 for any three, 1 for a free throw, otherwise 2.
    pub fn points(self) -> u8 {
        if self.is_three() {
            3
        } else if self.is_free_throw() {
            1
        } else {
            2
        }
    }

    /// Shots finished at or around the rim.
    pub fn is_inside(self) -> bool {
        matches!(
            self,
            ShotType::Layup
                | ShotType::Dunk
                | ShotType::AlleyOop
                | ShotType::Putback
                | ShotType::TipIn
                | ShotType::HookShot
                | ShotType::Floater
        )
    }

    /// Field-goal jump shots (everything that is neither inside nor a free throw).
    pub fn is_jump_shot(self) -> bool {
        !self.is_inside() && !self.is_free_throw()
    }

    pub fn skill(self) -> ShotSkill {
        match self {
            ShotType::FreeThrow => ShotSkill::FreeThrow,
            t if t.is_three() => ShotSkill::ThreePoint,
            ShotType::MidRangePullUp | ShotType::MidRangeCatchAndShoot | ShotType::PostFade => {
                ShotSkill::MidRange
            }
            _ => ShotSkill::Inside,
        }
    }

    /// Interior defenders contest shots in the paint, perimeter defenders the rest.
    pub fn uses_interior_defense(self) -> bool {
        self.is_inside() || self == ShotType::PostFade
    }

    /// Distance range in feet the shot is taken from.
    pub fn distance_range(self) -> (f32, f32) {
        match self {
            ShotType::Dunk | ShotType::TipIn => (0.0, 2.0),
            ShotType::AlleyOop | ShotType::Putback => (0.0, 3.0),
            ShotType::Layup => (1.0, 4.0),
            ShotType::HookShot => (4.0, 10.0),
            ShotType::Floater => (6.0, 12.0),
            ShotType::PostFade => (8.0, 15.0),
            ShotType::MidRangePullUp | ShotType::MidRangeCatchAndShoot => (12.0, 21.0),
            ShotType::ThreePointCorner => (22.0, 23.0),
            ShotType::ThreePointCatchAndShoot
            | ShotType::ThreePointPullUp
            | ShotType::ThreePointStepBack => (23.0, 27.0),
            ShotType::ThreePointDeep => (28.0, 35.0),
            ShotType::FreeThrow => (15.0, 15.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShotType::Layup => "layup",
            ShotType::Dunk => "dunk",
            ShotType::Floater => "floater",
            ShotType::HookShot => "hook shot",
            ShotType::PostFade => "post fadeaway",
            ShotType::MidRangePullUp => "pull-up jumper",
            ShotType::MidRangeCatchAndShoot => "mid-range jumper",
            ShotType::ThreePointCatchAndShoot => "three",
            ShotType::ThreePointPullUp => "pull-up three",
            ShotType::ThreePointCorner => "corner three",
            ShotType::ThreePointStepBack => "step-back three",
            ShotType::ThreePointDeep => "deep three",
            ShotType::FreeThrow => "free throw",
            ShotType::AlleyOop => "alley-oop",
            ShotType::Putback => "putback",
            ShotType::TipIn => "tip-in",
        }
    }
}

/// Defensive pressure on a shot, from none to total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestLevel {
    Open,
    Light,
    Moderate,
    Heavy,
    Smothered,
}

impl ContestLevel {
    /// Multiplier on make probability.
    pub fn modifier(self) -> f32 {
        match self {
            ContestLevel::Open => 1.10,
            ContestLevel::Light => 1.02,
            ContestLevel::Moderate => 0.94,
            ContestLevel::Heavy => 0.80,
            ContestLevel::Smothered => 0.40,
        }
    }

    /// A defender actually got a hand up.
    pub fn is_contested(self) -> bool {
        self >= ContestLevel::Moderate
    }
}
