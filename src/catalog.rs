//! Fixed content the local generators draw from.

pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub struct Joke {
    pub setup: &'static str,
    pub punchline: &'static str,
}

pub struct Art {
    pub name: &'static str,
    pub art: &'static str,
}

pub struct Challenge {
    pub challenge: &'static str,
    pub difficulty: &'static str,
    pub hint: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        quote: "The best way to predict the future is to invent it.",
        author: "Alan Kay",
    },
    Quote {
        quote: "Code is like humor. When you have to explain it, it's bad.",
        author: "Cory House",
    },
    Quote {
        quote: "First, solve the problem. Then, write the code.",
        author: "John Johnson",
    },
    Quote {
        quote: "Simplicity is the soul of efficiency.",
        author: "Austin Freeman",
    },
    Quote {
        quote: "Make it work, make it right, make it fast.",
        author: "Kent Beck",
    },
    Quote {
        quote: "The only way to learn a new programming language is by writing programs in it.",
        author: "Dennis Ritchie",
    },
    Quote {
        quote: "Talk is cheap. Show me the code.",
        author: "Linus Torvalds",
    },
    Quote {
        quote: "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
        author: "Martin Fowler",
    },
];

pub const JOKES: &[Joke] = &[
    Joke {
        setup: "Why do programmers prefer dark mode?",
        punchline: "Because light attracts bugs! 🐛",
    },
    Joke {
        setup: "Why do Java developers wear glasses?",
        punchline: "Because they can't C# 😎",
    },
    Joke {
        setup: "How many programmers does it take to change a light bulb?",
        punchline: "None. It's a hardware problem! 💡",
    },
    Joke {
        setup: "What's a programmer's favorite place?",
        punchline: "Foo Bar! 🍺",
    },
    Joke {
        setup: "Why did the programmer quit his job?",
        punchline: "Because he didn't get arrays! 💰",
    },
    Joke {
        setup: "What do you call a programmer from Finland?",
        punchline: "Nerdic! 🇫🇮",
    },
];

pub const FACTS: &[&str] = &[
    "The first computer bug was an actual bug! In 1947, a moth was found trapped in a relay of the Harvard Mark II computer.",
    "The first computer programmer was Ada Lovelace in the 1840s, about 100 years before the first modern computer was built!",
    "The first 1GB hard drive, released in 1980, weighed over 500 pounds and cost $40,000.",
    "Python was named after Monty Python's Flying Circus, not the snake! 🐍",
    "The original name of Windows was 'Interface Manager'.",
    "The first domain ever registered was Symbolics.com on March 15, 1985.",
    "The first email was sent in 1971 by Ray Tomlinson to himself as a test.",
];

pub const ART: &[Art] = &[
    Art {
        name: "Robot",
        art: "
    ╔═══╗
    ║ ◉ ║  Beep boop!
    ╚═╤═╝  I'm here to help!
      ║
    ╔═╧═╗
    ║   ║
    ╚═══╝
",
    },
    Art {
        name: "Computer",
        art: "
    ┌─────────────────┐
    │ > Code is Art   │
    │ > Keep Coding!  │
    └─────────────────┘
         │││││││
        ═══════════
",
    },
    Art {
        name: "Trophy",
        art: "
        ___
       '   `
      |  ★  |  You're
       '._.'   Awesome!
        ║║║
       ═════
",
    },
    Art {
        name: "Rocket",
        art: r"
         /\
        |  |
        |  |   To the moon! 🚀
       /____\
      | o  o |
      |______|
       /|  |\
",
    },
    Art {
        name: "Cat",
        art: r"
     /\_/\
    ( o.o )  Meow!
     > ^ <   *purr*
    /|   |\
",
    },
];

pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        challenge: "Write a function that reverses a string without using built-in reverse methods",
        difficulty: "Easy",
        hint: "Try using a loop and string concatenation!",
    },
    Challenge {
        challenge: "Implement a function to check if a number is prime",
        difficulty: "Easy",
        hint: "A prime number is only divisible by 1 and itself",
    },
    Challenge {
        challenge: "Create a function that finds the longest palindrome in a string",
        difficulty: "Medium",
        hint: "Consider expanding around each character",
    },
    Challenge {
        challenge: "Write a function to detect if two strings are anagrams",
        difficulty: "Easy",
        hint: "Anagrams have the same characters in different orders",
    },
];

pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "🌟 You're doing amazing! Keep up the great work!",
    "💪 Every expert was once a beginner. Keep learning!",
    "🚀 Your code today is better than your code yesterday!",
    "✨ Debugging is just another way of learning!",
    "🎯 Small progress is still progress. Keep going!",
    "🌈 Your creativity makes the world better through code!",
    "⚡ You've got this! One line of code at a time!",
];

pub const CELEBRATION_MESSAGE: &str = "🎉 Surprise! You're awesome! 🎉";
