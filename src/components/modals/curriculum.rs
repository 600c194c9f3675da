//! Curricula shown from the education timeline, keyed by the opener's
//! `data-education` value.

pub struct Section {
    pub heading: &'static str,
    pub subjects: &'static [&'static str],
}

pub struct Curriculum {
    pub key: &'static str,
    pub title: &'static str,
    pub sections: &'static [Section],
}

const CURRICULA: &[Curriculum] = &[
    Curriculum {
        key: "btech",
        title: "B.Tech Computer Science & Engineering - Curriculum",
        sections: &[
            Section {
                heading: "Core Computer Science Fundamentals",
                subjects: &[
                    "Data Structures and Algorithms",
                    "Design and Analysis of Algorithms",
                    "Theory of Computation",
                    "Compiler Design",
                    "Computer Architecture and Organization",
                    "Operating Systems",
                    "Computer Networks",
                ],
            },
            Section {
                heading: "Programming and Software Development",
                subjects: &[
                    "Computer Programming (Python)",
                    "Structured and Object-Oriented Programming (C/C++)",
                    "Computer Programming (Java)",
                    "Web Programming",
                    "Software Engineering",
                ],
            },
            Section {
                heading: "Mathematics and Applied Mathematics",
                subjects: &[
                    "Calculus",
                    "Differential Equations and Transforms",
                    "Complex Variables and Linear Algebra",
                    "Probability and Statistics",
                    "Discrete Mathematics and Graph Theory",
                ],
            },
            Section {
                heading: "Artificial Intelligence and Data Science",
                subjects: &[
                    "Artificial Intelligence",
                    "Foundations of Data Science",
                    "Natural Language Processing",
                    "Wearable Computing",
                ],
            },
            Section {
                heading: "Systems and Security",
                subjects: &["Embedded Systems", "Cryptography and Network Security"],
            },
        ],
    },
    Curriculum {
        key: "class12",
        title: "Grade 12 - Curriculum",
        sections: &[Section {
            heading: "Subjects",
            subjects: &[
                "English Core",
                "Mathematics",
                "Physics",
                "Chemistry",
                "Computer Science (Python & SQL)",
                "Physical Education",
                "Work Experience",
                "Health and Physical Education",
                "General Studies",
            ],
        }],
    },
    Curriculum {
        key: "class10",
        title: "Grade 10 - Curriculum",
        sections: &[Section {
            heading: "Subjects",
            subjects: &[
                "English Language and Literature",
                "Sanskrit (Language)",
                "Mathematics Standard",
                "Science (Theory)",
                "Social Science",
                "Information Technology",
            ],
        }],
    },
];

pub fn lookup(key: &str) -> Option<&'static Curriculum> {
    CURRICULA.iter().find(|c| c.key == key)
}

impl Curriculum {
    pub fn subject_count(&self) -> usize {
        self.sections.iter().map(|s| s.subjects.len()).sum()
    }

    /// Markup for the dialog body: one heading and list per section.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for section in self.sections {
            html.push_str("<h4>");
            html.push_str(&escape(section.heading));
            html.push_str("</h4><ul>");
            for subject in section.subjects {
                html.push_str("<li>");
                html.push_str(&escape(subject));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }
        html
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
