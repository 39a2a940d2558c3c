//! Easter eggs: a fixed, ordered table of triggers with canned responses.
//!
//! Matching is a linear scan over [`EASTER_EGGS`]; the first hit wins, so
//! table order is match priority.

use std::sync::LazyLock;

use rand::RngExt;
use regex::Regex;

/// What an input has to look like to hit an egg.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Case-insensitive whole-string comparison.
    Exact(&'static str),
    Pattern(Regex),
}

impl Trigger {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Trigger::Exact(s) => message.to_lowercase() == s.to_lowercase(),
            Trigger::Pattern(re) => re.is_match(message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EasterEgg {
    pub trigger: Trigger,
    pub response: &'static str,
    pub emoji: Option<&'static str>,
}

impl EasterEgg {
    pub fn new(trigger: Trigger, response: &'static str, emoji: Option<&'static str>) -> Self {
        Self {
            trigger,
            response,
            emoji,
        }
    }
}

/// Case-insensitive pattern trigger. Only used with the literals below.
fn pattern(re: &str) -> Trigger {
    Trigger::Pattern(
        Regex::new(&format!("(?i){re}")).expect("built-in easter egg pattern must compile"),
    )
}

pub static EASTER_EGGS: LazyLock<Vec<EasterEgg>> = LazyLock::new(|| {
    vec![
        EasterEgg::new(
            pattern(r"^(hello|hi|hey)\s+there$"),
            "General Kenobi! 👋 (Oops, wrong franchise... but hello to you too!)",
            Some("👋"),
        ),
        EasterEgg::new(
            pattern(r"^the answer to life,? the universe,? and everything$"),
            "42! 🌌 (Don't forget your towel!)",
            Some("🌌"),
        ),
        EasterEgg::new(
            pattern(r"^do you like coding\??$"),
            "I love it! It's like poetry, but with more semicolons. 💻✨",
            Some("💻"),
        ),
        EasterEgg::new(
            pattern(r"^sudo make me a sandwich$"),
            "🥪 Here's your sandwich! (With extra permissions on the side)",
            Some("🥪"),
        ),
        EasterEgg::new(
            pattern(r"^(tell me a joke|make me laugh)$"),
            "Why do programmers prefer dark mode? Because light attracts bugs! 🐛😄",
            Some("😄"),
        ),
        EasterEgg::new(
            pattern(r"^(you('re| are) (awesome|amazing|great))$"),
            "No, YOU'RE awesome! 🌟 Now get back to building something amazing!",
            Some("🌟"),
        ),
        EasterEgg::new(
            pattern(r"^(thank you|thanks)$"),
            "You're welcome! Remember: happy coding is the best coding! 😊",
            Some("😊"),
        ),
        EasterEgg::new(
            pattern(r"^(what is love|baby don't hurt me)$"),
            "🎵 Baby don't hurt me... don't hurt me... no more! 🎵 (Now that's stuck in your head!)",
            Some("🎵"),
        ),
        EasterEgg::new(
            pattern(r"^(konami|up up down down)$"),
            "↑ ↑ ↓ ↓ ← → ← → B A START! 🎮 You've unlocked... absolutely nothing! (But you tried, and that's what counts)",
            Some("🎮"),
        ),
        EasterEgg::new(
            pattern(r"^(where are the bugs\??)$"),
            "They're not bugs, they're undocumented features! 🐛✨",
            Some("🐛"),
        ),
        EasterEgg::new(
            pattern(r"^(coffee|i need coffee)$"),
            "☕ Here's a virtual coffee! Fun fact: The first webcam was created at Cambridge to monitor a coffee pot!",
            Some("☕"),
        ),
        EasterEgg::new(
            pattern(r"^(pizza|i('m| am) hungry)$"),
            "🍕 Virtual pizza incoming! No calories, all the satisfaction!",
            Some("🍕"),
        ),
        EasterEgg::new(
            pattern(r"^(are you (a )?robot\??)$"),
            "Beep boop! 🤖 Just kidding... or am I? *winks in binary*",
            Some("🤖"),
        ),
        EasterEgg::new(
            pattern(r"^(show me the (money|code))$"),
            "💰 The best code is the code you don't have to write! But here's a $ anyway.",
            Some("💰"),
        ),
        EasterEgg::new(
            pattern(r"^(it'?s? over 9000!?)$"),
            "WHAT?! 9000?! ⚡ *crushes scouter* There's no way that can be right!",
            Some("⚡"),
        ),
    ]
});

pub const HINTS: &[&str] = &[
    "💡 Psst... try typing 'sudo make me a sandwich'",
    "🎮 Know any Konami codes?",
    "🌌 What's the answer to life, the universe, and everything?",
    "☕ Sometimes saying 'coffee' helps...",
    "🥚 There might be some hidden commands... just saying!",
    "✨ Type 'tell me a joke' for a surprise!",
];

pub const ACHIEVEMENT_MESSAGES: &[&str] = &[
    "🏆 Achievement Unlocked: Easter Egg Hunter!",
    "⭐ You found a secret! Have a virtual high-five! ✋",
    "🎯 Bulls-eye! You discovered a hidden feature!",
    "🔍 Detective skills: Level 100!",
    "🎪 You found the fun! Keep exploring!",
];

/// Scan `eggs` in order and return the first whose trigger matches the
/// trimmed message.
pub fn find_easter_egg<'a>(eggs: &'a [EasterEgg], message: &str) -> Option<&'a EasterEgg> {
    let trimmed = message.trim();
    eggs.iter().find(|egg| egg.trigger.matches(trimmed))
}

/// Check a message against the built-in table.
pub fn check_easter_egg(message: &str) -> Option<&'static EasterEgg> {
    find_easter_egg(&EASTER_EGGS, message)
}

fn pick<R: RngExt + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

pub fn random_hint_with<R: RngExt + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, HINTS)
}

pub fn random_hint() -> &'static str {
    random_hint_with(&mut rand::rng())
}

pub fn achievement_message_with<R: RngExt + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, ACHIEVEMENT_MESSAGES)
}

pub fn achievement_message() -> &'static str {
    achievement_message_with(&mut rand::rng())
}

/// ASCII art for special occasions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    Rocket,
    Party,
    Trophy,
    Success,
}

impl Celebration {
    pub const ALL: [Celebration; 4] = [
        Celebration::Rocket,
        Celebration::Party,
        Celebration::Trophy,
        Celebration::Success,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Celebration::Rocket => "rocket",
            Celebration::Party => "party",
            Celebration::Trophy => "trophy",
            Celebration::Success => "success",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn art(self) -> &'static str {
        match self {
            Celebration::Rocket => {
                r"
    🚀
   /|\
  / | \
 /  |  \
    |
   / \
  /   \
"
            }
            Celebration::Party => {
                "
  🎉 🎊 🎉
    🎈
   PARTY!
    🎈
  🎊 🎉 🎊
"
            }
            Celebration::Trophy => {
                "
    ___
   |   |
   | ★ |
   |___|
    |||
   =====
"
            }
            Celebration::Success => {
                "
   ✓ ✓ ✓
  SUCCESS!
   ✓ ✓ ✓
"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn table_builds_with_fifteen_entries() {
        assert_eq!(EASTER_EGGS.len(), 15);
    }

    #[test]
    fn greeting_matches_case_insensitively() {
        let egg = check_easter_egg("HELLO THERE").unwrap();
        assert_eq!(egg.emoji, Some("👋"));
        assert!(egg.response.starts_with("General Kenobi!"));
    }

    #[test]
    fn greeting_allows_extra_inner_whitespace() {
        assert!(check_easter_egg("hey    there").is_some());
    }

    #[test]
    fn unrelated_text_does_not_match() {
        assert!(check_easter_egg("random text").is_none());
        assert!(check_easter_egg("").is_none());
    }

    #[test]
    fn input_is_trimmed_before_matching() {
        let egg = check_easter_egg(" sudo make me a sandwich ").unwrap();
        assert_eq!(egg.emoji, Some("🥪"));
    }

    #[test]
    fn patterns_are_anchored() {
        assert!(check_easter_egg("please sudo make me a sandwich").is_none());
        assert!(check_easter_egg("coffee please").is_none());
    }

    #[test]
    fn optional_parts_in_patterns() {
        assert!(check_easter_egg("The answer to life the universe and everything").is_some());
        assert!(check_easter_egg("do you like coding?").is_some());
        assert!(check_easter_egg("are you robot").is_some());
        assert!(check_easter_egg("Are you a robot?").is_some());
        assert!(check_easter_egg("its over 9000!").is_some());
        assert!(check_easter_egg("it's over 9000").is_some());
        assert!(check_easter_egg("I'm hungry").is_some());
    }

    #[test]
    fn exact_trigger_ignores_case() {
        let trigger = Trigger::Exact("Xyzzy");
        assert!(trigger.matches("xYZZY"));
        assert!(!trigger.matches("xyzzy!"));
    }

    #[test]
    fn first_matching_entry_wins() {
        let eggs = vec![
            EasterEgg::new(Trigger::Exact("coffee"), "first", None),
            EasterEgg::new(pattern("^cof+ee$"), "second", None),
        ];
        assert_eq!(find_easter_egg(&eggs, "COFFEE").unwrap().response, "first");
        assert_eq!(find_easter_egg(&eggs, "cofffee").unwrap().response, "second");
    }

    #[test]
    fn random_hint_is_from_list() {
        for _ in 0..50 {
            assert!(HINTS.contains(&random_hint()));
        }
    }

    #[test]
    fn achievement_message_is_from_list() {
        for _ in 0..50 {
            assert!(ACHIEVEMENT_MESSAGES.contains(&achievement_message()));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_hint_with(&mut a), random_hint_with(&mut b));
            assert_eq!(achievement_message_with(&mut a), achievement_message_with(&mut b));
        }
    }

    #[test]
    fn seeded_picks_cover_every_hint() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_hint_with(&mut rng));
        }
        assert_eq!(seen.len(), HINTS.len());
    }

    #[test]
    fn celebration_names_round_trip() {
        for c in Celebration::ALL {
            assert_eq!(Celebration::from_name(c.name()), Some(c));
            assert!(!c.art().trim().is_empty());
        }
        assert_eq!(Celebration::from_name("Trophy"), Some(Celebration::Trophy));
        assert_eq!(Celebration::from_name("cake"), None);
    }
}
