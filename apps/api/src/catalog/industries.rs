//! Industries and the realistic project topics offered for each.

pub const INDUSTRIES: &[&str] = &[
    "School",
    "Healthcare",
    "Hospital",
    "Networking",
    "Barangay",
    "E-commerce",
    "Finance",
    "Entertainment",
    "Transportation",
    "Agriculture",
];

/// Topics used when the industry is empty or unknown.
pub const DEFAULT_TOPICS: &[&str] = &["Automation", "Data Management", "Monitoring", "Tracking"];

/// Returns the topic list for a known industry. Matching is exact.
pub fn industry_topics(industry: &str) -> Option<&'static [&'static str]> {
    let topics: &'static [&'static str] = match industry {
        "School" => &[
            "Student Attendance",
            "E-Learning",
            "Grading System",
            "Scheduling",
            "Library Management",
        ],
        "Healthcare" => &[
            "Patient Monitoring",
            "Telemedicine",
            "Medical Records",
            "Health Tracking",
            "Appointment System",
        ],
        "Hospital" => &[
            "Inventory Management",
            "Staff Scheduling",
            "Electronic Health Records",
            "Emergency Response",
        ],
        "Networking" => &[
            "Network Security",
            "LAN Management",
            "IoT Device Connection",
            "VPN Monitoring",
        ],
        "Barangay" => &[
            "Resident Database",
            "Incident Reporting",
            "Permit Request",
            "Barangay Information System",
        ],
        "E-commerce" => &[
            "Product Management",
            "Customer Review",
            "Sales Analytics",
            "Inventory Control",
        ],
        "Finance" => &[
            "Expense Tracker",
            "Budget Planner",
            "Loan Management",
            "Transaction System",
        ],
        "Entertainment" => &[
            "Music Streaming",
            "Video Sharing",
            "Event Ticketing",
            "Fan Engagement App",
        ],
        "Transportation" => &[
            "Vehicle Tracking",
            "Ride Booking",
            "Traffic Monitoring",
            "Logistics Management",
        ],
        "Agriculture" => &[
            "Crop Monitoring",
            "Weather Prediction",
            "Smart Irrigation",
            "Farm Record System",
        ],
        _ => return None,
    };
    Some(topics)
}

pub fn industry_topics_or_default(industry: &str) -> &'static [&'static str] {
    industry_topics(industry).unwrap_or(DEFAULT_TOPICS)
}
