//! The reference J16T instrument: question bank, trait words, chart prompts,
//! bar colours and the sixteen-profile grid.
//!
//! Long descriptive texts are not compiled in; they ship in
//! `data/descriptions.json` and are merged at runtime.

use super::{ContentStore, LetterInfo, ProfileTone, Question, TypeProfile};
use crate::types::{Axis, Letter, LetterMap, TypeCode};
use std::collections::HashMap;

#[rustfmt::skip]
const QUESTIONS: [(Axis, &str, &str, &str); 80] = [
    (Axis::SN, "Are you:", "Observant of your surroundings", "Introspective and thinking"),
    (Axis::EI, "While waiting for the train, do you:", "Chat with others", "Stay silent"),
    (Axis::TF, "When dealing with people, are you:", "Direct", "Gentle"),
    (Axis::JP, "Does workplace clutter:", "Stress you", "Leave you indifferent"),
    (Axis::TF, "Which is easier for you to give?", "Critical/Direct feedback", "Vague feedback (avoiding details)"),
    (Axis::SN, "Do you:", "Stick to the tried and trusted", "Speculate about possibilities"),
    (Axis::JP, "Do you:", "Decide instantaneously", "Linger over decision making"),
    (Axis::SN, "Are you:", "Factual", "Imaginative"),
    (Axis::EI, "When the phone rings, do you:", "Rush to answer it", "Let others answer"),
    (Axis::TF, "Do you place importance on:", "Hard data", "Opinion"),
    (Axis::JP, "Do you prefer agreements to be:", "Written up and signed", "Agreed on word and a handshake"),
    (Axis::TF, "When evaluating others, are you:", "Impersonal and objective", "Subjective and personal"),
    (Axis::SN, "Are you more interested in:", "What is real", "What is possible"),
    (Axis::JP, "Are you more at ease:", "When matters are complete", "With work in progress"),
    (Axis::SN, "Are you always:", "Up to date with the news", "Somewhat out of touch"),
    (Axis::EI, "When socialising, do you:", "Speak with many people", "Speak with a few friends"),
    (Axis::TF, "When you are communicating with others, do you:", "Talk directly", "Talk diplomatically"),
    (Axis::JP, "Do you prefer:", "A detailed outline of work done", "A list of completed tasks"),
    (Axis::TF, "Do you prefer:", "A rational, consistent approach", "A harmonious, personal approach"),
    (Axis::SN, "Do you like authors who:", "Write hard facts", "Use metaphors"),
    (Axis::JP, "Are you more comfortable:", "After a decision is made", "Before a decision is made"),
    (Axis::SN, "Do you find visionaries:", "Annoying", "Fascinating"),
    (Axis::EI, "Does being at a party:", "Energise you", "Drain you"),
    (Axis::TF, "In an argument or discussion, do you:", "Act confrontationally", "Seek collaborative solutions"),
    (Axis::JP, "For you, is giving feedback:", "Easy", "Difficult"),
    (Axis::TF, "Which is preferable for you?", "To be just", "To be understanding"),
    (Axis::SN, "Is 'Common sense':", "Usually reliable", "Occasionally questionable"),
    (Axis::JP, "Do you:", "Do one job at a time", "Work at many jobs simultaneously"),
    (Axis::SN, "Do you:", "Say what is on your mind", "Express many opinions"),
    (Axis::EI, "In a group of people, do you:", "Talk a lot", "Mostly listen"),
    (Axis::TF, "Which sums you up best?", "Cool-headed", "Warm-hearted"),
    (Axis::JP, "Are you:", "Organised", "Spontaneous"),
    (Axis::TF, "In work situations, do you:", "Give orders", "Get everyone to find solutions"),
    (Axis::SN, "Do you prefer:", "Sensible/Factual people", "People who explore options"),
    (Axis::JP, "Do you prefer to:", "Work to deadlines", "Work whenever"),
    (Axis::SN, "Which ability do you consider best?", "Ability to follow a plan", "Ability to adapt and adjust plans"),
    (Axis::EI, "Are you:", "A social person", "A private person"),
    (Axis::TF, "Which are you?", "A logical person", "A feeling person"),
    (Axis::JP, "Do you decide:", "Based on analysis", "On a considered hunch"),
    (Axis::TF, "Which is most satisfying for you?", "Thorough discussion", "Reaching agreement"),
    (Axis::SN, "After a meal, do you:", "Tidy up immediately", "Leave it until later"),
    (Axis::JP, "Is your behaviour:", "Hurried", "Laid back"),
    (Axis::SN, "Do you hear what is said as:", "The whole story", "Most of the story"),
    (Axis::EI, "Do you:", "Share your feelings easily", "Act reserved"),
    (Axis::TF, "Are you:", "An uncompromising person", "A collaborative person"),
    (Axis::JP, "Do you find it:", "Stressful to change plans", "Easy to reschedule meetings"),
    (Axis::TF, "Are you:", "Tough-minded", "Fair-minded"),
    (Axis::SN, "When evaluating a situation, do you:", "See only what is in front of you", "Imagine more possibilities"),
    (Axis::JP, "Is your approach to:", "Ensure everything is arranged", "Just let things happen"),
    (Axis::SN, "Do you only trust:", "Past experiences", "That all possibilities are worth checking"),
    (Axis::EI, "Do you:", "Know a little about everything", "Know much about a few things"),
    (Axis::TF, "Are you convinced more often by:", "Hard evidence", "Possible outside-the-box solutions"),
    (Axis::JP, "Is your approach to life:", "Structured", "Flexible"),
    (Axis::TF, "Which is the greatest asset?", "Strength of will", "Strength of fair compassion"),
    (Axis::SN, "Do you always feel:", "Down to earth", "Like you daydream a little"),
    (Axis::JP, "How do you cope with unexpected events?", "Get a good handle on things", "Get very stressed"),
    (Axis::SN, "Do you act in a:", "Routine way", "Whimsical way"),
    (Axis::EI, "Are you:", "A good conversationalist", "A good listener"),
    (Axis::TF, "Are you:", "Thick-skinned", "Sensitive"),
    (Axis::JP, "Do you tend to:", "Rely on old ways of doing", "Be on the lookout for new ways"),
    (Axis::TF, "Do you prefer to:", "Operate the production machine", "Manage the team of people"),
    (Axis::SN, "Are you more:", "Practical", "Ingenious"),
    (Axis::JP, "Are you:", "More punctual", "Leisurely/Nonchalant"),
    (Axis::SN, "Do you approach work in:", "An organised and principled way", "An innovative and flexible way"),
    (Axis::EI, "Are you:", "Social and outgoing", "Reserved and quiet"),
    (Axis::TF, "Do you most trust:", "Your experience", "Your hunches"),
    (Axis::JP, "Are you:", "Always on the go", "Relaxed, easy going"),
    (Axis::TF, "Which is the greater error?", "Being too passionate", "Being too objective"),
    (Axis::SN, "Do you tend to be more:", "Deliberate", "Spontaneous"),
    (Axis::JP, "In evaluating others, what influences you most?", "Laws", "Circumstances"),
    (Axis::SN, "Which do you prefer in stories/film?", "Action", "Fantasy"),
    (Axis::EI, "In your sports club, do you:", "Promote activities", "Do the administration"),
    (Axis::TF, "Which is more difficult for you?", "To identify with others", "To utilise others"),
    (Axis::JP, "Are you:", "A deadlines person", "A 'just whenever' person"),
    (Axis::TF, "Which is most vital?", "Following the to-do list", "Teamwork"),
    (Axis::SN, "Are you:", "Easy to talk to/approach", "Shy and reserved"),
    (Axis::JP, "When do you plan your annual holidays?", "Months before", "Weeks before"),
    (Axis::SN, "Are you attracted to:", "The fundamentals", "The promise"),
    (Axis::TF, "For you, which is more important?", "Following the rules", "Everyone taking full responsibility"),
    (Axis::JP, "Do you use:", "Written work schedules", "Your memory"),
];

const ENERGY: &str = "Where do I get my energy from? How do I relate to the outer world?";
const INFORMATION: &str = "How do I take in Information? Find out about things?";
const DECISIONS: &str = "How do I make decisions?";
const ORGANISATION: &str = "How do I organise my outer world?";

// (letter, word, prompt, answer, colour)
const LETTERS: [(Letter, &str, &str, &str, &str); 8] = [
    (
        Letter::E,
        "Extroverted",
        ENERGY,
        "I mainly direct my energy towards the outer world of people and things. I tend to act first and reflect later. Interaction stimulates me, and I often feel energized after being active and social.",
        "#eae400",
    ),
    (
        Letter::I,
        "Introverted",
        ENERGY,
        "I mainly direct my energy towards the inner world of experiences and ideas. I tend to reflect first and act later. I value privacy and often need time alone to recharge after social interaction.",
        "#44b3e1",
    ),
    (
        Letter::S,
        "Sensate",
        INFORMATION,
        "I focus on what is real and actual. I value practical application and trust information that I can confirm with my five senses. I pay attention to details and the present moment.",
        "#ff9900",
    ),
    (
        Letter::N,
        "iNtuitive",
        INFORMATION,
        "I focus on patterns and meanings. I value imagination and inspiration, trusting my intuition and hunches. I am often more interested in future possibilities and the 'big picture' than specific details.",
        "#782170",
    ),
    (
        Letter::T,
        "Thinking",
        DECISIONS,
        "I prefer to make decisions based on logic and objective analysis. I search for the truth and principles that apply in a given situation. I strive to be impartial and value consistency.",
        "#215c98",
    ),
    (
        Letter::F,
        "Feeling",
        DECISIONS,
        "I prefer to make decisions based on values and subjective evaluation. I am concerned with harmony and how the decision will affect the people involved. I strive to be compassionate and empathetic.",
        "#4ea72e",
    ),
    (
        Letter::J,
        "Considered",
        ORGANISATION,
        "I prefer a planned and organized approach to life. I like to have things settled and decided. I enjoy making lists, schedules, and bringing closure to tasks.",
        "#eb1515",
    ),
    (
        Letter::P,
        "iMpromptu",
        ORGANISATION,
        "I prefer a flexible and spontaneous approach to life. I like to keep my options open and adapt to new information as it arises. I feel comfortable going with the flow.",
        "#996633",
    ),
];

// Grid order as printed on the results page.
const PROFILES: [(&str, &str, ProfileTone); 16] = [
    ("ISTJ", "Life's Natural Organizers", ProfileTone::A),
    ("ISFJ", "Committed to Getting the Job Done", ProfileTone::B),
    ("INFJ", "An Inspiring Leader and Follower", ProfileTone::A),
    ("INTJ", "Life's Independent Thinkers", ProfileTone::B),
    ("ESTP", "Making the Most of the Moment", ProfileTone::B),
    ("ESFP", "Let's Make Work Fun", ProfileTone::A),
    ("ENFP", "People Are the Product", ProfileTone::B),
    ("ENTP", "Progress Is the Product", ProfileTone::A),
    ("ISTP", "Just Do It", ProfileTone::A),
    ("ISFP", "Action Speaks Louder Than Words", ProfileTone::B),
    ("INFP", "Making Life Kinder and Gentler", ProfileTone::A),
    ("INTP", "Life's Problem Solvers", ProfileTone::B),
    ("ESTJ", "Life's Natural Administrators", ProfileTone::B),
    ("ESFJ", "Everyone's Trusted Friend", ProfileTone::A),
    ("ENFJ", "Smooth-Talking Persuaders", ProfileTone::B),
    ("ENTJ", "Life's Natural Leaders", ProfileTone::A),
];

pub(super) fn build() -> ContentStore {
    let questions = QUESTIONS
        .iter()
        .map(|&(axis, text, a, b)| Question {
            axis,
            text: text.to_string(),
            options: [a.to_string(), b.to_string()],
        })
        .collect();

    let mut letters = LetterMap::<LetterInfo>::default();
    for (letter, word, prompt, answer, color) in LETTERS {
        letters[letter] = LetterInfo {
            word: word.to_string(),
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            description: String::new(),
            color: color.to_string(),
        };
    }

    let profiles = PROFILES
        .iter()
        .filter_map(|&(code, title, tone)| {
            code.parse::<TypeCode>().ok().map(|code| TypeProfile {
                code,
                title: title.to_string(),
                tone,
            })
        })
        .collect();

    ContentStore {
        questions,
        letters,
        profiles,
        type_descriptions: HashMap::new(),
    }
}
