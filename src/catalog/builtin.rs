use chrono::{Days, NaiveDate};

use super::{Catalog, QuizPack, QuizQuestion};

fn question(id: &str, text: &str, options: [&str; 4], correct_option_index: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option_index,
    }
}

fn pack(
    anchor: NaiveDate,
    offset_days: u64,
    (id, title, description, emoji): (&str, &str, &str, &str),
    questions: Vec<QuizQuestion>,
) -> QuizPack {
    QuizPack {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        emoji: emoji.to_string(),
        release_date: anchor.checked_add_days(Days::new(offset_days)).unwrap_or(anchor),
        questions,
    }
}

impl Catalog {
    /// The bundled week of packs, one released per day starting at `anchor`.
    pub fn builtin(anchor: NaiveDate) -> Self {
        Self::new(vec![
            pack(
                anchor,
                0,
                ("tech-trivia-1", "Tech Trivia", "Test your knowledge of technology history and facts!", "💻"),
                vec![
                    question("tech-1", "Which company created the first smartphone with a touchscreen?", ["Apple", "IBM", "Nokia", "BlackBerry"], 1),
                    question("tech-2", "What year was the first iPhone released?", ["2005", "2006", "2007", "2008"], 2),
                    question(
                        "tech-3",
                        "What does \"HTTP\" stand for?",
                        ["HyperText Transfer Protocol", "High Tech Transfer Process", "Hybrid Text Technology Platform", "Home Tool Transfer Protocol"],
                        0,
                    ),
                    question("tech-4", "Who is considered the father of the World Wide Web?", ["Bill Gates", "Steve Jobs", "Tim Berners-Lee", "Vint Cerf"], 2),
                    question("tech-5", "Which programming language was created first?", ["Java", "Python", "FORTRAN", "C"], 2),
                ],
            ),
            pack(
                anchor,
                1,
                ("pop-culture-1", "Pop Culture Mania", "How well do you know your memes and trends?", "🎭"),
                vec![
                    question(
                        "pop-1",
                        "Which viral video featured a dramatic chipmunk turning to the camera?",
                        ["Charlie Bit My Finger", "Dramatic Chipmunk", "Keyboard Cat", "Nyan Cat"],
                        1,
                    ),
                    question("pop-2", "What year did the \"Harlem Shake\" meme go viral?", ["2010", "2011", "2012", "2013"], 3),
                    question(
                        "pop-3",
                        "Which clothing item became unexpectedly popular due to Bernie Sanders at the 2021 inauguration?",
                        ["Scarves", "Mittens", "Beanies", "Boots"],
                        1,
                    ),
                    question(
                        "pop-4",
                        "The phrase \"OK Boomer\" is directed at which generation?",
                        ["Generation X", "Millennials", "Baby Boomers", "Generation Z"],
                        2,
                    ),
                    question(
                        "pop-5",
                        "Which viral challenge involved dumping ice water on your head?",
                        ["Cinnamon Challenge", "Ice Bucket Challenge", "Mannequin Challenge", "Tide Pod Challenge"],
                        1,
                    ),
                ],
            ),
            pack(
                anchor,
                2,
                ("science-1", "Science Wonders", "Explore the fascinating world of scientific discoveries!", "🔬"),
                vec![
                    question("sci-1", "What is the hardest natural substance on Earth?", ["Titanium", "Diamond", "Tungsten", "Graphene"], 1),
                    question("sci-2", "What is the smallest unit of life?", ["Atom", "Cell", "Molecule", "Organelle"], 1),
                    question("sci-3", "Which planet has the most moons?", ["Jupiter", "Saturn", "Uranus", "Neptune"], 1),
                    question("sci-4", "What percentage of the human body is water?", ["50-60%", "60-70%", "70-80%", "80-90%"], 1),
                    question("sci-5", "Which animal can regenerate its limbs?", ["Lobster", "Starfish", "Jellyfish", "All of these"], 3),
                ],
            ),
            pack(
                anchor,
                3,
                ("history-1", "History Mysteries", "Journey through time with these historical riddles!", "⏳"),
                vec![
                    question("hist-1", "Which civilization built Machu Picchu?", ["Aztec", "Inca", "Maya", "Olmec"], 1),
                    question("hist-2", "Which year did World War II end?", ["1943", "1944", "1945", "1946"], 2),
                    question(
                        "hist-3",
                        "Who was the first woman to win a Nobel Prize?",
                        ["Marie Curie", "Rosalind Franklin", "Ada Lovelace", "Florence Nightingale"],
                        0,
                    ),
                    question(
                        "hist-4",
                        "Which ancient wonder was located in Alexandria?",
                        ["The Hanging Gardens", "The Lighthouse", "The Colossus", "The Temple of Artemis"],
                        1,
                    ),
                    question("hist-5", "Who painted the Mona Lisa?", ["Vincent van Gogh", "Leonardo da Vinci", "Pablo Picasso", "Michelangelo"], 1),
                ],
            ),
            pack(
                anchor,
                4,
                ("gaming-1", "Gaming Greats", "Level up your gaming knowledge with these questions!", "🎮"),
                vec![
                    question(
                        "game-1",
                        "Which game featured the first widely recognized Easter egg?",
                        ["Pac-Man", "Adventure (Atari 2600)", "Super Mario Bros.", "Donkey Kong"],
                        1,
                    ),
                    question("game-2", "Which character is NOT from the Final Fantasy series?", ["Cloud Strife", "Tifa Lockhart", "Link", "Tidus"], 2),
                    question("game-3", "What year was Minecraft first released to the public?", ["2008", "2009", "2010", "2011"], 2),
                    question(
                        "game-4",
                        "Which company developed the game \"The Witcher 3: Wild Hunt\"?",
                        ["Bethesda", "Ubisoft", "CD Projekt Red", "BioWare"],
                        2,
                    ),
                    question("game-5", "What was the first commercially successful video game?", ["Pong", "Space Invaders", "Pac-Man", "Donkey Kong"], 0),
                ],
            ),
            pack(
                anchor,
                5,
                ("food-1", "Food Frenzy", "Satisfy your hunger for food knowledge!", "🍔"),
                vec![
                    question("food-1", "Which country invented pizza?", ["United States", "Greece", "Italy", "France"], 2),
                    question("food-2", "What is the main ingredient in traditional hummus?", ["Lentils", "Chickpeas", "Black beans", "Soybeans"], 1),
                    question("food-3", "Which spice is known as \"red gold\"?", ["Cinnamon", "Turmeric", "Saffron", "Paprika"], 2),
                    question("food-4", "Which fruit is technically a berry?", ["Strawberry", "Banana", "Cherry", "Apple"], 1),
                    question("food-5", "What is the national dish of Spain?", ["Gazpacho", "Tortilla Española", "Paella", "Churros"], 2),
                ],
            ),
            pack(
                anchor,
                6,
                ("movies-1", "Movie Magic", "Test your cinematic knowledge!", "🎬"),
                vec![
                    question(
                        "movie-1",
                        "Which film won the first Academy Award for Best Picture?",
                        ["Wings", "Gone with the Wind", "All Quiet on the Western Front", "Casablanca"],
                        0,
                    ),
                    question(
                        "movie-2",
                        "Who directed \"Jurassic Park\"?",
                        ["James Cameron", "Steven Spielberg", "George Lucas", "Christopher Nolan"],
                        1,
                    ),
                    question(
                        "movie-3",
                        "Which actor has won the most Academy Awards?",
                        ["Meryl Streep", "Katharine Hepburn", "Jack Nicholson", "Daniel Day-Lewis"],
                        1,
                    ),
                    question(
                        "movie-4",
                        "What was the first feature-length animated film?",
                        ["Snow White and the Seven Dwarfs", "Fantasia", "Pinocchio", "Bambi"],
                        0,
                    ),
                    question("movie-5", "Which movie features the character Jack Dawson?", ["Avatar", "Inception", "Titanic", "The Revenant"], 2),
                ],
            ),
        ])
    }
}
