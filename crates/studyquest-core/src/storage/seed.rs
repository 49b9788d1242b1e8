//! Demo data used when no state document exists or it cannot be decoded.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use uuid::Uuid;

use super::Snapshot;
use crate::model::{
    Badge, CustomReward, PomodoroConfiguration, Quest, QuestFrequency, StudySession, Subject,
    Task, Technique, Theme, ThemeStoreItem, UserProfile,
};

/// Number of days of demo session history.
const SEED_SESSION_DAYS: i64 = 7;

/// Build the seed snapshot. Session history covers the week ending at the
/// local day of `now`, oldest first.
pub fn default_snapshot(now: DateTime<Utc>) -> Snapshot {
    let subjects = subjects();
    let techniques = techniques();
    let themes = themes();
    let theme_store = themes.iter().map(ThemeStoreItem::for_theme).collect();

    Snapshot {
        profile: UserProfile {
            xp: 1200,
            coins: 360,
            current_streak: 3,
            longest_streak: 10,
            preferred_theme_id: themes.first().map(|t| t.id),
            focus_mode_enabled: false,
        },
        tasks: tasks(&subjects),
        quests: quests(),
        custom_rewards: custom_rewards(),
        sessions: sessions(&subjects, &techniques, now),
        badges: badges(),
        subjects,
        techniques,
        themes,
        theme_store,
        pomodoro_configuration: PomodoroConfiguration::default(),
    }
}

fn subjects() -> Vec<Subject> {
    vec![
        Subject::new("Math", "#76E0C2", "#3A9ED9"),
        Subject::new("History", "#FFD166", "#EF476F"),
        Subject::new("Biology", "#9EF01A", "#0A9396"),
    ]
}

fn techniques() -> Vec<Technique> {
    vec![
        Technique::new("Pomodoro", "25/5 cadence with restorative long breaks."),
        Technique::new("Deep Work", "Long focus blocks, ideal for essays."),
        Technique::new("Spaced Repetition", "Flashcard-first retention work."),
    ]
}

fn tasks(subjects: &[Subject]) -> Vec<Task> {
    let mut outline = Task::new("Outline history essay", subjects[1].clone(), 45);
    outline.completed = true;
    vec![
        Task::new("Review derivatives", subjects[0].clone(), 30),
        outline,
        Task::new("Flashcards: plants", subjects[2].clone(), 20),
    ]
}

fn quests() -> Vec<Quest> {
    vec![
        Quest {
            id: Uuid::new_v4(),
            title: "Daily Focus".into(),
            required_minutes: 50,
            reward_xp: 100,
            reward_coins: 20,
            progress_minutes: 25,
            frequency: QuestFrequency::Daily,
            claimed: false,
        },
        Quest {
            id: Uuid::new_v4(),
            title: "Weekly Momentum".into(),
            required_minutes: 300,
            reward_xp: 400,
            reward_coins: 80,
            progress_minutes: 120,
            frequency: QuestFrequency::Weekly,
            claimed: false,
        },
    ]
}

fn custom_rewards() -> Vec<CustomReward> {
    // Seeded coin values predate the xp/5 rule, so they are set explicitly.
    vec![
        CustomReward {
            reward_coins: 25,
            ..CustomReward::new("Matcha Run", "🥤", 120, 120)
        },
        CustomReward {
            reward_coins: 40,
            ..CustomReward::new("Game Break", "🎮", 200, 200)
        },
    ]
}

fn badges() -> Vec<Badge> {
    let badge = |name: &str, description: &str, icon: &str, achieved| Badge {
        id: Uuid::new_v4(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        achieved,
    };
    vec![
        badge("Spark", "First session logged", "⚡️", true),
        badge("Streak Master", "10-day streak", "🔥", false),
        badge("Focus Pro", "500 total minutes", "🎯", true),
    ]
}

fn themes() -> Vec<Theme> {
    #[allow(clippy::too_many_arguments)]
    fn theme(
        name: &str,
        background: &str,
        surface: &str,
        primary: &str,
        accent: &str,
        glow: Option<&str>,
        extra: Option<&str>,
        price: u32,
    ) -> Theme {
        let extras: BTreeMap<String, String> = extra
            .map(|key| (key.to_string(), "true".to_string()))
            .into_iter()
            .collect();
        Theme {
            id: Uuid::new_v4(),
            name: name.into(),
            background: background.into(),
            surface: surface.into(),
            primary: primary.into(),
            accent: accent.into(),
            glow: glow.map(str::to_string),
            extras,
            price,
            unlocked: price == 0,
        }
    }

    vec![
        theme("Cyberpunk", "#050505", "#0F111A", "#8A2BE2", "#0FF", Some("#0FF"), Some("scanline"), 0),
        theme("Space", "#050816", "#0B1024", "#9DCEFF", "#F72585", Some("#9DCEFF"), Some("stars"), 150),
        theme("Chiikawa", "#FFF5F8", "#FFE9F0", "#FF9EAA", "#8AC926", None, Some("cute"), 200),
        theme("Retro Terminal", "#001100", "#002200", "#39FF14", "#32CD32", Some("#39FF14"), Some("crt"), 120),
        theme("Light", "#F5F5F7", "#FFFFFF", "#0A84FF", "#30D158", None, None, 0),
    ]
}

fn sessions(subjects: &[Subject], techniques: &[Technique], now: DateTime<Utc>) -> Vec<StudySession> {
    let today = now.with_timezone(&Local).date_naive();
    (0..SEED_SESSION_DAYS)
        .rev()
        .map(|offset| {
            let i = (SEED_SESSION_DAYS - 1 - offset) as usize;
            let day = today - Duration::days(offset);
            let date = day
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
                .map(|d| d.with_timezone(&Utc))
                .unwrap_or(now - Duration::days(offset));
            StudySession {
                id: Uuid::new_v4(),
                subject: subjects[i % subjects.len()].clone(),
                technique: techniques[i % techniques.len()].clone(),
                duration_secs: (20 + 5 * i as u64) * 60,
                date,
                earned_xp: 30 + 10 * i as u32,
                earned_coins: 5 + 3 * i as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::days_between;

    #[test]
    fn seed_has_expected_shape() {
        let snapshot = default_snapshot(Utc::now());
        assert_eq!(snapshot.subjects.len(), 3);
        assert_eq!(snapshot.techniques.len(), 3);
        assert_eq!(snapshot.tasks.len(), 3);
        assert_eq!(snapshot.quests.len(), 2);
        assert_eq!(snapshot.custom_rewards.len(), 2);
        assert_eq!(snapshot.badges.len(), 3);
        assert_eq!(snapshot.themes.len(), 5);
        assert_eq!(snapshot.theme_store.len(), 5);
        assert_eq!(snapshot.sessions.len(), 7);
    }

    #[test]
    fn seed_profile_and_pomodoro() {
        let snapshot = default_snapshot(Utc::now());
        let p = &snapshot.profile;
        assert_eq!((p.xp, p.coins, p.current_streak, p.longest_streak), (1200, 360, 3, 10));
        assert!(!p.focus_mode_enabled);
        assert_eq!(p.preferred_theme_id, Some(snapshot.themes[0].id));

        let c = snapshot.pomodoro_configuration;
        assert_eq!(
            (c.focus_minutes, c.short_break_minutes, c.long_break_minutes, c.rounds_before_long_break),
            (25, 5, 15, 4)
        );
    }

    #[test]
    fn free_themes_are_unlocked() {
        let snapshot = default_snapshot(Utc::now());
        for theme in &snapshot.themes {
            assert_eq!(theme.unlocked, theme.price == 0, "{}", theme.name);
        }
        for item in &snapshot.theme_store {
            assert_eq!(item.price, item.theme.price);
            assert_eq!(item.unlocked, item.theme.unlocked);
        }
    }

    #[test]
    fn seed_tasks_follow_reward_rule() {
        let snapshot = default_snapshot(Utc::now());
        for task in &snapshot.tasks {
            assert_eq!(task.reward_xp, Task::reward_for(task.expected_minutes));
        }
    }

    #[test]
    fn session_history_ends_today() {
        let now = Utc::now();
        let snapshot = default_snapshot(now);
        let today = now.with_timezone(&Local).date_naive();
        let last = snapshot.last_session().unwrap();
        assert_eq!(days_between(last.date, today), 0);
        assert_eq!(days_between(snapshot.sessions[0].date, today), 6);
    }
}
