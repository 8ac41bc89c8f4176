//! Project showcase catalog.
//!
//! The list is built once at startup, stored in [`AppState`](crate::state::AppState)
//! and only ever read.

use portfolio_core::ProjectRecord;

const GITHUB_PROFILE: &str = "https://github.com/ZyxxBoy";

/// The projects shown on the home page, in display order.
#[must_use]
pub fn default_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "Smart Wheelchair / SMATSI",
            "IoT-powered smart wheelchair system designed to improve mobility and quality of life for wheelchair users, featuring intelligent monitoring and connected assistive technology.",
            &["ESP32", "IoT", "Sensor Integration", "C++"],
            GITHUB_PROFILE,
            "2024",
            Some("images/projects/smatsi.jpg"),
        ),
        ProjectRecord::new(
            "AIRIS — Adaptive Intelligence Room Inside System",
            "An AI-driven smart room system that adapts lighting, temperature, and environment based on occupant behavior using machine learning and IoT sensors.",
            &["Python", "Machine Learning", "ESP32", "Flask"],
            GITHUB_PROFILE,
            "2025",
            Some("images/projects/airis.png"),
        ),
        ProjectRecord::new(
            "AQUASENSE",
            "Smart water quality monitoring system using IoT sensors for real-time analysis of water parameters with cloud-based data visualization and alerts.",
            &["ESP32", "ThingSpeak", "Sensors", "MicroPython"],
            GITHUB_PROFILE,
            "2024",
            Some("images/projects/aquasense.jpg"),
        ),
        ProjectRecord::new(
            "BEVISAT",
            "AI-powered system integrating data annotation, classification, and validation to support intelligent decision-making and AI model development.",
            &["Python", "Roboflow", "Data Annotation", "AI"],
            GITHUB_PROFILE,
            "2025",
            Some("images/projects/bevisat.jpg"),
        ),
        ProjectRecord::new(
            "SESA — Smart Energy System Analysis",
            "IoT-based energy monitoring and analysis platform for tracking power consumption patterns with smart analytics and efficiency recommendations.",
            &["ESP32", "Python", "Data Analysis", "IoT"],
            GITHUB_PROFILE,
            "2024",
            Some("images/projects/sesa.png"),
        ),
        ProjectRecord::new(
            "Deteksi Bahasa Isyarat Menggunakan Jari",
            "Computer vision application for real-time hand sign language detection and recognition using finger tracking and machine learning models.",
            &["Python", "Computer Vision", "TensorFlow", "OpenCV"],
            GITHUB_PROFILE,
            "2024",
            None,
        ),
        ProjectRecord::new(
            "OceanGuard — IoT Coastal Monitoring",
            "Real-time coastal monitoring IoT dashboard for tracking sea level and wind speed with live charts, 7-day predictions, and smart alert system.",
            &["Python", "Flask", "IoT", "Chart.js"],
            GITHUB_PROFILE,
            "2026",
            Some("images/projects/oceanguard.png"),
        ),
        ProjectRecord::new(
            "RBG — AI Background Removal",
            "AI-powered background removal web application with drag-and-drop upload, before/after image comparison, and instant download functionality.",
            &["Python", "Flask", "rembg", "AI"],
            GITHUB_PROFILE,
            "2026",
            Some("images/projects/rbg.png"),
        ),
        ProjectRecord::new(
            "SMARTNGON",
            "Next-generation smart IoT system with integrated monitoring, automation, and intelligent control for modern connected environments.",
            &["ESP32", "IoT", "Flask", "MicroPython"],
            GITHUB_PROFILE,
            "2026",
            Some("images/projects/smartngon.jpg"),
        ),
    ]
}
