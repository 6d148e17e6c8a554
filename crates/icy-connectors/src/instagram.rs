use icy_core::Platform;

use crate::audience::AudienceProfile;
use crate::simulated::FillerProfile;

static AUDIENCE: AudienceProfile = AudienceProfile {
    age_groups: &[
        ("13-17", (5, 15)),
        ("18-24", (20, 35)),
        ("25-34", (25, 45)),
        ("35-44", (15, 25)),
        ("45-54", (5, 15)),
        ("55+", (2, 8)),
    ],
    genders: &[("female", (45, 85)), ("male", (15, 55)), ("other", (1, 5))],
    top_regions: &[
        ("Los Angeles", (8, 15)),
        ("New York", (6, 12)),
        ("Chicago", (4, 8)),
        ("Miami", (3, 7)),
        ("San Francisco", (3, 6)),
    ],
    interests: &[
        ("Fashion", (60, 95)),
        ("Beauty", (40, 80)),
        ("Lifestyle", (50, 85)),
        ("Travel", (30, 70)),
        ("Food", (25, 65)),
    ],
    best_posting_times: &["9:00 AM", "1:00 PM", "7:00 PM"],
    peak_days: &["Tuesday", "Wednesday", "Sunday"],
    session_minutes: (2, 8),
    channel_stats: false,
};

pub(crate) static PROFILE: FillerProfile = FillerProfile {
    platform: Platform::Instagram,
    first_index: 100,
    seed_salt: 0x1a57_a000,
    username: |n| format!("influencer_{n}"),
    display_name: |n| format!("Influencer {n}"),
    bio: |category| format!("{category} enthusiast | Creating content daily | DM for collabs"),
    categories: &[
        "Fashion",
        "Beauty",
        "Fitness",
        "Food",
        "Travel",
        "Lifestyle",
        "Tech",
        "Art",
    ],
    locations: &[
        "Los Angeles",
        "New York",
        "Miami",
        "Chicago",
        "Austin",
        "Seattle",
        "Denver",
    ],
    followers: (10_000, 500_000),
    engagement_tenths: (20, 80),
    posts: &[
        "Loving this new look! What do you think?",
        "Another day, another adventure!",
        "Sharing my latest favorites with you all!",
        "Can't believe how amazing this turned out!",
        "Grateful for all the support from you amazing people!",
        "New week, new goals! Who's with me?",
        "This has been on my wishlist forever! Finally got it!",
        "Throwback to this incredible moment! Missing it already",
    ],
    post_interval_days: 1,
    likes: (1_000, 15_000),
    comments: (50, 800),
    shares: (10, 200),
    audience: &AUDIENCE,
};
