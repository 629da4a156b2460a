use common::game::SessionRng;

/// Music mood derived from the weather. Mirrors the four food
/// categories on the board, but is picked from the forecast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Sunny,
    Rainy,
    Cold,
    Stormy,
}

impl Mood {
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Sunny => "☀",
            Mood::Rainy => "🌧",
            Mood::Cold => "❄",
            Mood::Stormy => "⚡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Sunny => "Sunny",
            Mood::Rainy => "Rainy",
            Mood::Cold => "Cold",
            Mood::Stormy => "Stormy",
        }
    }

    pub fn wake_up_message(&self) -> &'static str {
        match self {
            Mood::Sunny => "☀ Rise and shine! It's a beautiful day ahead!",
            Mood::Rainy => "🌧 Cozy vibes for a peaceful wake-up",
            Mood::Cold => "❄ Embrace the calm and start fresh",
            Mood::Stormy => "⚡ Channel that storm energy - you've got this!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherReport {
    pub condition: &'static str,
    pub temperature: i32,
}

/// Condition and temperature pairs the mock forecast draws from. There
/// is no weather service behind the app; a row is picked at random.
const MOCK_WEATHER: [(&str, i32); 4] = [
    ("Clear", 24),
    ("Rain", 16),
    ("Snow", -2),
    ("Thunderstorm", 18),
];

pub fn mock_weather(rng: &mut SessionRng) -> WeatherReport {
    let (condition, temperature) = MOCK_WEATHER[rng.random_range(0..MOCK_WEATHER.len())];
    WeatherReport {
        condition,
        temperature,
    }
}

/// Condition text wins over temperature; a cold thunderstorm is still
/// stormy.
pub fn mood_for(condition: &str, temperature: i32) -> Mood {
    let condition = condition.to_lowercase();
    if condition.contains("rain") || condition.contains("drizzle") {
        Mood::Rainy
    } else if condition.contains("storm") || condition.contains("thunder") {
        Mood::Stormy
    } else if temperature < 5 {
        Mood::Cold
    } else {
        Mood::Sunny
    }
}

pub fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub genre: &'static str,
    pub reason: &'static str,
    pub youtube_query: &'static str,
}

const SUNNY_TRACKS: [Track; 3] = [
    Track {
        title: "Good as Hell",
        artist: "Lizzo",
        genre: "Pop",
        reason: "Perfect upbeat energy for a sunny day!",
        youtube_query: "Lizzo Good as Hell",
    },
    Track {
        title: "Walking on Sunshine",
        artist: "Katrina and the Waves",
        genre: "Pop Rock",
        reason: "Classic sunny day anthem",
        youtube_query: "Walking on Sunshine Katrina Waves",
    },
    Track {
        title: "Here Comes the Sun",
        artist: "The Beatles",
        genre: "Rock",
        reason: "The ultimate sunshine song",
        youtube_query: "Here Comes the Sun Beatles",
    },
];

const RAINY_TRACKS: [Track; 3] = [
    Track {
        title: "Rainy Days and Mondays",
        artist: "The Carpenters",
        genre: "Soft Rock",
        reason: "Perfect for contemplative rainy moments",
        youtube_query: "Rainy Days Mondays Carpenters",
    },
    Track {
        title: "Lo-Fi Hip Hop Radio",
        artist: "ChilledCow",
        genre: "Lo-Fi",
        reason: "Cozy beats for rainy day vibes",
        youtube_query: "lofi hip hop radio",
    },
    Track {
        title: "The Night We Met",
        artist: "Lord Huron",
        genre: "Indie Folk",
        reason: "Melancholic and beautiful for rainy weather",
        youtube_query: "The Night We Met Lord Huron",
    },
];

const COLD_TRACKS: [Track; 3] = [
    Track {
        title: "Weightless",
        artist: "Marconi Union",
        genre: "Ambient",
        reason: "Scientifically designed to reduce anxiety - perfect for cold, quiet moments",
        youtube_query: "Weightless Marconi Union",
    },
    Track {
        title: "Svefn-g-englar",
        artist: "Sigur Rós",
        genre: "Post-Rock",
        reason: "Ethereal and atmospheric like a winter landscape",
        youtube_query: "Svefn-g-englar Sigur Ros",
    },
    Track {
        title: "Winter Journey",
        artist: "Max Richter",
        genre: "Neo-Classical",
        reason: "Contemplative classical for cold weather",
        youtube_query: "Winter Journey Max Richter",
    },
];

const STORMY_TRACKS: [Track; 3] = [
    Track {
        title: "Thunderstruck",
        artist: "AC/DC",
        genre: "Hard Rock",
        reason: "High energy to match the storm's power!",
        youtube_query: "Thunderstruck AC/DC",
    },
    Track {
        title: "Immigrant Song",
        artist: "Led Zeppelin",
        genre: "Rock",
        reason: "Epic and powerful like thunder",
        youtube_query: "Immigrant Song Led Zeppelin",
    },
    Track {
        title: "Storm",
        artist: "Godspeed You! Black Emperor",
        genre: "Post-Rock",
        reason: "Dramatic instrumental that captures storm intensity",
        youtube_query: "Storm Godspeed You Black Emperor",
    },
];

pub fn tracks_for(mood: Mood) -> &'static [Track; 3] {
    match mood {
        Mood::Sunny => &SUNNY_TRACKS,
        Mood::Rainy => &RAINY_TRACKS,
        Mood::Cold => &COLD_TRACKS,
        Mood::Stormy => &STORMY_TRACKS,
    }
}

pub fn youtube_search_url(query: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        encode_query(query)
    )
}

// Form encoding for the search query: spaces become '+', unreserved
// characters pass through, everything else is percent-encoded.
fn encode_query(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}
