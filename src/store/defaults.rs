//! Placeholder scripts seeded into an empty store

/// Built-in (name, content) pairs, in seeding order
pub const DEFAULT_SCRIPTS: &[(&str, &str)] = &[
    (
        "hello_world",
        concat!(
            "-- Ronix sample script\n",
            "print(\"Hello from Ronix executor!\")\n",
        ),
    ),
    (
        "blox_fruits",
        concat!(
            "-- Blox Fruits helper\n",
            "-- Add your preferred Blox Fruits script below\n",
            "print(\"Load your Blox Fruits routine here\")\n",
        ),
    ),
    (
        "doors",
        concat!(
            "-- DOORS helper\n",
            "-- Insert your DOORS script or loot notifier here\n",
            "print(\"Load your DOORS routine here\")\n",
        ),
    ),
    (
        "pet_simulator",
        concat!(
            "-- Pet Simulator helper\n",
            "-- Customize with your favorite pet farming script\n",
            "print(\"Load your Pet Simulator routine here\")\n",
        ),
    ),
    (
        "brookhaven",
        concat!(
            "-- Brookhaven helper\n",
            "-- Drop in RP automation or quality-of-life scripts\n",
            "print(\"Load your Brookhaven routine here\")\n",
        ),
    ),
    (
        "grow_a_garden",
        concat!(
            "-- Grow a Garden helper\n",
            "-- Plant your automation or farming logic here\n",
            "print(\"Load your Grow a Garden routine here\")\n",
        ),
    ),
    (
        "rivals_99",
        concat!(
            "-- Rivals 99 helper\n",
            "-- Add combat, loot, or QoL tweaks for Rivals 99\n",
            "print(\"Load your Rivals 99 routine here\")\n",
        ),
    ),
    (
        "night_in_the_forest",
        concat!(
            "-- Night in the Forest helper\n",
            "-- Slot in survival or resource scripts for Night in the Forest\n",
            "print(\"Load your Night in the Forest routine here\")\n",
        ),
    ),
];

/// Names of the built-in scripts
pub fn default_script_names() -> impl Iterator<Item = &'static str> {
    DEFAULT_SCRIPTS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sanitize_name;
    use std::collections::HashSet;

    #[test]
    fn test_eight_unique_defaults() {
        let names: HashSet<&str> = default_script_names().collect();
        assert_eq!(DEFAULT_SCRIPTS.len(), 8);
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_default_names_need_no_sanitizing() {
        for name in default_script_names() {
            assert_eq!(sanitize_name(name), name);
        }
    }

    #[test]
    fn test_default_contents_are_comment_then_print() {
        for (name, content) in DEFAULT_SCRIPTS {
            let lines: Vec<&str> = content.lines().collect();
            assert!(lines[0].starts_with("-- "), "{} lacks a header comment", name);
            assert!(lines[lines.len() - 1].starts_with("print("), "{} lacks a print", name);
            assert!(content.ends_with(")\n"), "{} lacks a trailing newline", name);
        }
    }

    #[test]
    fn test_default_contents_not_empty() {
        for (name, content) in DEFAULT_SCRIPTS {
            assert!(!content.trim().is_empty(), "{} has no content", name);
        }
    }
}
