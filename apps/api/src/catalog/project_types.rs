//! Project types, the languages suggested for each, and where to find related work.

use serde::Serialize;

pub const PROJECT_TYPES: &[&str] = &[
    "Mobile App",
    "Web App",
    "Desktop App",
    "IoT App",
    "AI App",
    "Data App",
];

/// Language suggestions for one project type.
/// `recommended` drives title generation; `others` is shown as alternatives only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageSuggestions {
    pub recommended: &'static [&'static str],
    pub others: &'static [&'static str],
}

pub static DEFAULT_LANGUAGES: LanguageSuggestions = LanguageSuggestions {
    recommended: &["Python"],
    others: &[],
};

pub const DEFAULT_SOURCES: &[&str] = &["https://github.com/explore"];

static MOBILE_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["Flutter", "Kotlin", "Java"],
    others: &["React Native", "Swift", "Dart", "Ionic", "Xamarin"],
};

static WEB_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["HTML", "CSS", "JavaScript", "PHP"],
    others: &[
        "React",
        "Node.js",
        "Laravel",
        "Django",
        "Vue.js",
        "Express.js",
        "Bootstrap",
    ],
};

static DESKTOP_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["Python", "C#", "JavaFX"],
    others: &["Electron", "C++", "VB.NET", "Qt", "Tkinter", "WPF"],
};

static IOT_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["C++", "Python", "Arduino"],
    others: &["Raspberry Pi", "MicroPython", "ESP32", "C"],
};

static AI_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["Python", "TensorFlow", "PyTorch"],
    others: &["Keras", "OpenCV", "Scikit-learn", "Jupyter Notebook"],
};

static DATA_APP: LanguageSuggestions = LanguageSuggestions {
    recommended: &["Python", "SQL", "R"],
    others: &["Pandas", "NumPy", "Tableau", "Power BI", "Excel", "Matplotlib"],
};

pub fn suggested_languages(ptype: &str) -> Option<&'static LanguageSuggestions> {
    match ptype {
        "Mobile App" => Some(&MOBILE_APP),
        "Web App" => Some(&WEB_APP),
        "Desktop App" => Some(&DESKTOP_APP),
        "IoT App" => Some(&IOT_APP),
        "AI App" => Some(&AI_APP),
        "Data App" => Some(&DATA_APP),
        _ => None,
    }
}

pub fn suggested_languages_or_default(ptype: &str) -> &'static LanguageSuggestions {
    suggested_languages(ptype).unwrap_or(&DEFAULT_LANGUAGES)
}

/// Galleries and topic pages with existing projects of the given type.
pub fn related_projects(ptype: &str) -> Option<&'static [&'static str]> {
    let sources: &'static [&'static str] = match ptype {
        "Mobile App" => &[
            "https://github.com/topics/mobile-app",
            "https://dribbble.com/tags/app-design",
            "https://play.google.com/store/apps",
            "https://www.behance.net/search/projects?search=mobile+app",
        ],
        "Web App" => &[
            "https://github.com/topics/web-app",
            "https://vercel.com/templates",
            "https://www.frontendmentor.io/challenges",
            "https://dribbble.com/tags/web-design",
        ],
        "Desktop App" => &[
            "https://github.com/topics/desktop-app",
            "https://awesomeopensource.com/projects/desktop",
            "https://sourceforge.net/",
        ],
        "IoT App" => &[
            "https://github.com/topics/iot-projects",
            "https://www.hackster.io/",
            "https://create.arduino.cc/projecthub",
        ],
        "AI App" => &[
            "https://paperswithcode.com",
            "https://github.com/topics/ai",
            "https://huggingface.co/models",
            "https://www.kaggle.com/models",
        ],
        "Data App" => &[
            "https://kaggle.com/datasets",
            "https://github.com/topics/data-analysis",
            "https://data.world/",
            "https://public.tableau.com/en-us/s/gallery",
        ],
        _ => return None,
    };
    Some(sources)
}

pub fn related_projects_or_default(ptype: &str) -> &'static [&'static str] {
    related_projects(ptype).unwrap_or(DEFAULT_SOURCES)
}
