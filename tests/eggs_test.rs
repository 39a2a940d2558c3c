use rand::SeedableRng;
use rand::rngs::StdRng;

use surprise::eggs::{
    ACHIEVEMENT_MESSAGES, EASTER_EGGS, EasterEgg, HINTS, Trigger, achievement_message_with,
    check_easter_egg, find_easter_egg, random_hint_with,
};

#[test]
fn every_builtin_egg_has_emoji_and_response() {
    for egg in EASTER_EGGS.iter() {
        assert!(!egg.response.is_empty());
        let emoji = egg.emoji.expect("built-in eggs carry an emoji");
        assert!(!emoji.is_empty());
    }
}

#[test]
fn sample_inputs_hit_expected_eggs() {
    let cases = [
        ("HELLO THERE", "👋"),
        ("hi there", "👋"),
        ("the answer to life, the universe, and everything", "🌌"),
        ("sudo make me a sandwich", "🥪"),
        ("make me laugh", "😄"),
        ("you're amazing", "🌟"),
        ("you are great", "🌟"),
        ("Thanks", "😊"),
        ("baby don't hurt me", "🎵"),
        ("up up down down", "🎮"),
        ("where are the bugs?", "🐛"),
        ("I need coffee", "☕"),
        ("pizza", "🍕"),
        ("are you a robot?", "🤖"),
        ("show me the code", "💰"),
        ("IT'S OVER 9000!", "⚡"),
    ];
    for (input, emoji) in cases {
        let egg = check_easter_egg(input).unwrap_or_else(|| panic!("no egg for {input:?}"));
        assert_eq!(egg.emoji, Some(emoji), "{input:?}");
    }
}

#[test]
fn whitespace_is_trimmed_but_inner_text_must_match() {
    assert!(check_easter_egg("\t  thank you \n").is_some());
    assert!(check_easter_egg("thank you very much").is_none());
}

#[test]
fn no_match_for_ordinary_chat() {
    for input in ["random text", "how do I sort a vec?", "hello", "coffees"] {
        assert!(check_easter_egg(input).is_none(), "{input:?}");
    }
}

#[test]
fn custom_table_respects_order() {
    let eggs = vec![
        EasterEgg::new(Trigger::Exact("ping"), "exact wins", Some("🏓")),
        EasterEgg::new(Trigger::Exact("PING"), "never reached", None),
    ];
    let egg = find_easter_egg(&eggs, "  Ping ").unwrap();
    assert_eq!(egg.response, "exact wins");
    assert!(find_easter_egg(&eggs, "pong").is_none());
    assert!(find_easter_egg(&[], "ping").is_none());
}

#[test]
fn injected_rng_picks_from_lists() {
    let mut rng = StdRng::seed_from_u64(2026);
    for _ in 0..100 {
        assert!(HINTS.contains(&random_hint_with(&mut rng)));
        assert!(ACHIEVEMENT_MESSAGES.contains(&achievement_message_with(&mut rng)));
    }
}

#[test]
fn matcher_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| check_easter_egg("konami").map(|e| e.response)))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_some());
    }
}
