use icy_core::Platform;

use crate::audience::AudienceProfile;
use crate::simulated::FillerProfile;

static AUDIENCE: AudienceProfile = AudienceProfile {
    age_groups: &[
        ("13-17", (8, 20)),
        ("18-24", (25, 40)),
        ("25-34", (20, 35)),
        ("35-44", (10, 20)),
        ("45-54", (5, 15)),
        ("55+", (2, 10)),
    ],
    genders: &[("male", (40, 70)), ("female", (30, 60)), ("other", (1, 3))],
    top_regions: &[
        ("United States", (35, 55)),
        ("United Kingdom", (8, 15)),
        ("Canada", (6, 12)),
        ("Australia", (4, 8)),
        ("Germany", (3, 7)),
    ],
    interests: &[
        ("Technology", (40, 85)),
        ("Gaming", (30, 80)),
        ("Education", (35, 75)),
        ("Entertainment", (50, 90)),
        ("Fitness", (20, 60)),
    ],
    best_posting_times: &["12:00 PM", "3:00 PM", "8:00 PM"],
    peak_days: &["Thursday", "Saturday", "Sunday"],
    session_minutes: (6, 18),
    channel_stats: true,
};

pub(crate) static PROFILE: FillerProfile = FillerProfile {
    platform: Platform::Youtube,
    first_index: 200,
    seed_salt: 0x7b7e_b000,
    username: |n| format!("@creator{n}"),
    display_name: |n| format!("Creator {n}"),
    bio: |category| {
        format!(
            "Welcome to my channel! Creating {} content daily.",
            category.to_lowercase()
        )
    },
    categories: &[
        "Technology",
        "Gaming",
        "Beauty",
        "Fitness",
        "Food",
        "Travel",
        "Education",
        "Entertainment",
    ],
    locations: &[
        "Los Angeles",
        "New York",
        "London",
        "Toronto",
        "Sydney",
        "Berlin",
        "Tokyo",
    ],
    followers: (10_000, 1_000_000),
    engagement_tenths: (30, 100),
    posts: &[
        "You Won't Believe What Happened Next!",
        "The Ultimate Guide to Success",
        "My Honest Review After 30 Days",
        "This Changed Everything for Me",
        "Why Everyone is Talking About This",
        "I Tried This for a Week - Here's What Happened",
        "The Best Tips for Beginners",
    ],
    post_interval_days: 2,
    likes: (200, 3_000),
    comments: (20, 500),
    shares: (10, 200),
    audience: &AUDIENCE,
};
