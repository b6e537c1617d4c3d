//! Personalized learning-path catalogue for the dashboard.

use serde::Serialize;

use crate::domain::learner::{ChallengeLevel, LearnerProfile, TimePreference};

crate::learner_enum! {
    /// Whether a path can be started yet
    PathStatus {
        Available => "available",
        Locked => "locked",
    }
}

/// One entry in the learner's path list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub title: &'static str,
    pub description: &'static str,
    pub status: PathStatus,
    pub estimated_minutes: u32,
    pub lessons: u32,
}

/// A small, medium and large variant of one number.
#[derive(Clone, Copy)]
struct Scale {
    small: u32,
    mid: u32,
    large: u32,
}

impl Scale {
    fn by_time(self, time: TimePreference) -> u32 {
        match time {
            TimePreference::Short => self.small,
            TimePreference::Medium => self.mid,
            TimePreference::Long => self.large,
        }
    }

    fn by_challenge(self, challenge: ChallengeLevel) -> u32 {
        match challenge {
            ChallengeLevel::Low => self.small,
            ChallengeLevel::Medium => self.mid,
            ChallengeLevel::High => self.large,
        }
    }
}

struct PathTemplate {
    title: &'static str,
    description: &'static str,
    /// `(minutes, lessons)` for available paths.
    sizing: Option<(Scale, Scale)>,
    locked_minutes: u32,
    locked_lessons: u32,
}

const PATHS: &[PathTemplate] = &[
    PathTemplate {
        title: "Cardiovascular Health Fundamentals",
        description: "Understanding heart health, blood pressure, and circulation basics tailored to your learning style.",
        sizing: Some((
            Scale { small: 15, mid: 25, large: 40 },
            Scale { small: 4, mid: 6, large: 8 },
        )),
        locked_minutes: 0,
        locked_lessons: 0,
    },
    PathTemplate {
        title: "Nutrition Science & Meal Planning",
        description: "Evidence-based nutrition principles with practical meal planning strategies.",
        sizing: Some((
            Scale { small: 20, mid: 30, large: 45 },
            Scale { small: 5, mid: 7, large: 10 },
        )),
        locked_minutes: 0,
        locked_lessons: 0,
    },
    PathTemplate {
        title: "Exercise Physiology & Movement",
        description: "How your body responds to exercise and creating sustainable fitness routines.",
        sizing: None,
        locked_minutes: 25,
        locked_lessons: 6,
    },
    PathTemplate {
        title: "Mental Health & Stress Management",
        description: "Psychological wellness, stress reduction techniques, and emotional regulation.",
        sizing: None,
        locked_minutes: 30,
        locked_lessons: 8,
    },
];

/// Path list for `profile`.
///
/// Available paths size their duration by time preference and their lesson
/// count by challenge level; locked paths have fixed sizes.
pub fn learning_paths_for(profile: &LearnerProfile) -> Vec<LearningPath> {
    PATHS
        .iter()
        .map(|t| match t.sizing {
            Some((minutes, lessons)) => LearningPath {
                title: t.title,
                description: t.description,
                status: PathStatus::Available,
                estimated_minutes: minutes.by_time(profile.time_preference),
                lessons: lessons.by_challenge(profile.challenge_level),
            },
            None => LearningPath {
                title: t.title,
                description: t.description,
                status: PathStatus::Locked,
                estimated_minutes: t.locked_minutes,
                lessons: t.locked_lessons,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::profile::fixtures::premium_profile;

    #[test]
    fn available_paths_scale_with_time_and_challenge() {
        let mut p = premium_profile();
        p.time_preference = TimePreference::Short;
        p.challenge_level = ChallengeLevel::Low;
        let paths = learning_paths_for(&p);

        assert_eq!(paths[0].estimated_minutes, 15);
        assert_eq!(paths[0].lessons, 4);
        assert_eq!(paths[1].estimated_minutes, 20);
        assert_eq!(paths[1].lessons, 5);
    }

    #[test]
    fn long_high_challenge_gets_largest_paths() {
        // premium_profile is long / high.
        let paths = learning_paths_for(&premium_profile());
        assert_eq!(paths[0].estimated_minutes, 40);
        assert_eq!(paths[0].lessons, 8);
        assert_eq!(paths[1].estimated_minutes, 45);
        assert_eq!(paths[1].lessons, 10);
    }

    #[test]
    fn locked_paths_are_fixed() {
        let paths = learning_paths_for(&premium_profile());
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[2].status, PathStatus::Locked);
        assert_eq!(paths[2].estimated_minutes, 25);
        assert_eq!(paths[3].lessons, 8);
    }
}
