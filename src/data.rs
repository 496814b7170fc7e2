// Sample data backing every view. The product renders fixed mock content;
// these literals are the single place it lives.

pub const USER_NAME: &str = "SARAH_M";
pub const USER_XP: &str = "12,450 XP";
pub const USER_CREDITS: &str = "420 CR";

// Dashboard stat cards
pub const JOURNEY_PERCENT: u16 = 42;
pub const JOURNEY_CAPTION: &str = "LEVEL 12 // SYNCED";
pub const MISSIONS_DONE: u16 = 12;
pub const MISSIONS_TOTAL: u16 = 30;
pub const MISSIONS_CAPTION: &str = "SYSTEM DEPLOYED";
pub const PRACTICE_HOURS: &str = "18.5H";
pub const PRACTICE_CAPTION: &str = "STREAK: 14D";

pub struct SkillPoint {
    pub day: &'static str,
    pub value: u64,
}

pub const SKILL_GROWTH: [SkillPoint; 7] = [
    SkillPoint { day: "Mon", value: 12 },
    SkillPoint { day: "Tue", value: 18 },
    SkillPoint { day: "Wed", value: 15 },
    SkillPoint { day: "Thu", value: 25 },
    SkillPoint { day: "Fri", value: 45 },
    SkillPoint { day: "Sat", value: 30 },
    SkillPoint { day: "Sun", value: 55 },
];

pub const SKILL_GROWTH_CAPTION: &str = "COMMITS_MASTERED: +24%";

pub struct Achievement {
    pub name: &'static str,
    pub icon: &'static str,
    pub locked: bool,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        name: "First Commit",
        icon: "🌱",
        locked: false,
    },
    Achievement {
        name: "Branch Master",
        icon: "🌿",
        locked: false,
    },
    Achievement {
        name: "Conflict Solver",
        icon: "⚔",
        locked: true,
    },
    Achievement {
        name: "PR Pro",
        icon: "🚀",
        locked: false,
    },
];

pub struct PracticeEntry {
    pub title: &'static str,
    pub module: &'static str,
    pub time: &'static str,
}

pub const RECENT_PRACTICE: [PracticeEntry; 2] = [
    PracticeEntry {
        title: "Your First Commit",
        module: "Basics",
        time: "3m ago",
    },
    PracticeEntry {
        title: "Staging Files",
        module: "Workflow",
        time: "1h ago",
    },
];

pub struct NextMission {
    pub title: &'static str,
    pub module: &'static str,
    pub difficulty: &'static str,
    pub minutes: u16,
}

pub const NEXT_MISSION: NextMission = NextMission {
    title: "CREATE & MERGE A BRANCH",
    module: "Branching_Basics",
    difficulty: "EASY",
    minutes: 10,
};

pub struct QuickAction {
    pub label: &'static str,
    pub active: bool,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Basics",
        active: true,
    },
    QuickAction {
        label: "Branch",
        active: false,
    },
    QuickAction {
        label: "Merge",
        active: false,
    },
    QuickAction {
        label: "Collab",
        active: false,
    },
];

pub struct DailyChallenge {
    pub title: &'static str,
    pub done: u16,
    pub total: u16,
    pub xp: u32,
}

pub const DAILY_CHALLENGE: DailyChallenge = DailyChallenge {
    title: "FIX A BROKEN COMMIT HISTORY WITH `REBASE -I`.",
    done: 4,
    total: 7,
    xp: 200,
};

pub struct LeaderboardEntry {
    pub rank: u8,
    pub name: &'static str,
    pub xp: &'static str,
    pub is_me: bool,
}

pub const LEADERBOARD: [LeaderboardEntry; 3] = [
    LeaderboardEntry {
        rank: 1,
        name: "Alex_Dev",
        xp: "15,200",
        is_me: false,
    },
    LeaderboardEntry {
        rank: 2,
        name: "Sarah_M",
        xp: "12,450",
        is_me: true,
    },
    LeaderboardEntry {
        rank: 3,
        name: "Code_Ninja",
        xp: "11,800",
        is_me: false,
    },
];

// Learning path
pub const GLOBAL_PROGRESS_PERCENT: u16 = 33;

pub struct Lesson {
    pub title: &'static str,
    pub tag: &'static str,
    pub minutes: u16,
    pub xp: u32,
    pub kind: &'static str,
    pub completed: bool,
}

pub struct Module {
    pub track: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub done: u8,
    pub total: u8,
    pub completed: bool,
    pub lessons: &'static [Lesson],
}

pub const MODULES: [Module; 2] = [
    Module {
        track: "Basics",
        title: "GETTING STARTED",
        description: "Initial steps into the Git universe. Master the core lifecycle of local changes.",
        done: 3,
        total: 3,
        completed: true,
        lessons: &[
            Lesson {
                title: "YOUR FIRST COMMIT",
                tag: "BEGINNER",
                minutes: 10,
                xp: 200,
                kind: "COMMIT",
                completed: true,
            },
            Lesson {
                title: "THE STAGING AREA",
                tag: "BEGINNER",
                minutes: 15,
                xp: 350,
                kind: "STAGING",
                completed: true,
            },
            Lesson {
                title: "UNDERSTANDING STATUS",
                tag: "BEGINNER",
                minutes: 5,
                xp: 150,
                kind: "STATUS",
                completed: true,
            },
        ],
    },
    Module {
        track: "Advanced",
        title: "EDITING HISTORY",
        description: "Learn how to travel back in time and fix mistakes before they reach production.",
        done: 0,
        total: 4,
        completed: false,
        lessons: &[
            Lesson {
                title: "AMENDING COMMITS",
                tag: "INTERMEDIATE",
                minutes: 12,
                xp: 400,
                kind: "AMEND",
                completed: false,
            },
            Lesson {
                title: "INTERACTIVE REBASE",
                tag: "ADVANCED",
                minutes: 25,
                xp: 800,
                kind: "REBASE",
                completed: false,
            },
        ],
    },
];

// Practice mode
pub const PRACTICE_TITLE: &str = "PRACTICE MODE: BRANCHING BASICS";
pub const REPO_STATUS: &str = "Repo Status: Clean";

pub struct ExplorerEntry {
    pub name: &'static str,
    pub is_dir: bool,
    pub nested: bool,
}

pub const EXPLORER: [ExplorerEntry; 4] = [
    ExplorerEntry {
        name: "src",
        is_dir: true,
        nested: false,
    },
    ExplorerEntry {
        name: "index.js",
        is_dir: false,
        nested: true,
    },
    ExplorerEntry {
        name: "styles.css",
        is_dir: false,
        nested: true,
    },
    ExplorerEntry {
        name: ".gitignore",
        is_dir: false,
        nested: false,
    },
];

pub const EDITOR_SNIPPET: [&str; 2] = [
    "const app = require('express')();",
    "// TODO: Implement branch logic here",
];

pub const GIT_STATUS_OUTPUT: [&str; 3] = [
    "On branch main",
    "Your branch is up to date with 'origin/main'.",
    "nothing to commit, working tree clean",
];

pub const MENTOR_NAME: &str = "Senior Dev Bot";
pub const MENTOR_GREETING: &str = "Hello Sarah! I'm your Senior Dev mentor. Today we're learning \
about branching. Try running `git checkout -b feature-cool` in the terminal to get started!";
pub const MENTOR_HINTS: [&str; 2] = ["Explain mistake", "What next?"];

// Progress analytics
pub const SKILL_LEVEL: &str = "MID-LEVEL DEV";

pub struct WeekEfficiency {
    pub week: &'static str,
    pub current: u64,
    pub previous: u64,
}

pub const EFFICIENCY: [WeekEfficiency; 4] = [
    WeekEfficiency {
        week: "Week 1",
        current: 15,
        previous: 10,
    },
    WeekEfficiency {
        week: "Week 2",
        current: 28,
        previous: 8,
    },
    WeekEfficiency {
        week: "Week 3",
        current: 45,
        previous: 12,
    },
    WeekEfficiency {
        week: "Week 4",
        current: 62,
        previous: 5,
    },
];

pub struct FooterStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROGRESS_STATS: [FooterStat; 3] = [
    FooterStat {
        label: "MISTAKE REDUCTION",
        value: "-75%",
    },
    FooterStat {
        label: "TOTAL PRACTICES",
        value: "142",
    },
    FooterStat {
        label: "AVG ACCURACY",
        value: "92%",
    },
];

pub struct SkillArea {
    pub subject: &'static str,
    pub score: u16,
    pub full_mark: u16,
}

pub const SKILL_DISTRIBUTION: [SkillArea; 6] = [
    SkillArea {
        subject: "Committing",
        score: 120,
        full_mark: 150,
    },
    SkillArea {
        subject: "Branching",
        score: 98,
        full_mark: 150,
    },
    SkillArea {
        subject: "Merging",
        score: 86,
        full_mark: 150,
    },
    SkillArea {
        subject: "Conflict Res.",
        score: 65,
        full_mark: 150,
    },
    SkillArea {
        subject: "Clean Source",
        score: 85,
        full_mark: 150,
    },
    SkillArea {
        subject: "Staging",
        score: 110,
        full_mark: 150,
    },
];

pub const SKILL_NOTE: &str = "You are exceptionally strong in Committing and Staging.";

pub struct TimelineEvent {
    pub date: &'static str,
    pub event: &'static str,
    pub status: &'static str,
}

pub const MASTERY_TIMELINE: [TimelineEvent; 4] = [
    TimelineEvent {
        date: "FEB 12",
        event: "First Commit",
        status: "Completed",
    },
    TimelineEvent {
        date: "FEB 18",
        event: "Branching Basics",
        status: "Completed",
    },
    TimelineEvent {
        date: "FEB 25",
        event: "Conflict Resolution",
        status: "In Progress",
    },
    TimelineEvent {
        date: "MAR 05",
        event: "Advanced Rebase",
        status: "Upcoming",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_progress_matches_lessons() {
        let basics = &MODULES[0];
        assert_eq!(basics.done as usize, basics.lessons.len());
        assert!(basics.lessons.iter().all(|l| l.completed));

        let history = &MODULES[1];
        assert_eq!(history.done, 0);
        assert!(history.lessons.iter().all(|l| !l.completed));
    }

    #[test]
    fn test_skill_scores_within_full_mark() {
        for area in &SKILL_DISTRIBUTION {
            assert!(area.score <= area.full_mark);
        }
    }
}
