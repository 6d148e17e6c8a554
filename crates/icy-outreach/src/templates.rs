use icy_core::{BrandTone, CampaignGoal};

/// Phrase pools and fixed lines for one brand tone.
///
/// `{name}`, `{content_focus}` and `{product}` are substituted at synthesis time.
pub struct ToneTemplates {
    pub greeting: &'static [&'static str],
    pub opening: &'static [&'static str],
    pub compliment: &'static [&'static str],
    pub proposal: &'static [&'static str],
    pub closing: &'static [&'static str],
    pub call_to_action: &'static str,
    pub subject: &'static [&'static str],
    /// Lead-in before the product description.
    pub intro: &'static str,
    /// Characters of product description kept in the introduction.
    pub description_chars: usize,
}

static PROFESSIONAL: ToneTemplates = ToneTemplates {
    greeting: &["Dear {name},", "Hello {name},", "Hi {name},"],
    opening: &[
        "I hope this message finds you well.",
        "I trust you're doing well.",
        "I hope you're having a great day.",
    ],
    compliment: &[
        "I've been following your content and am impressed by your {content_focus}.",
        "Your recent work on {content_focus} caught our attention.",
        "We admire your expertise in {content_focus}.",
    ],
    proposal: &[
        "We would like to explore a potential collaboration opportunity.",
        "I'd love to discuss a partnership opportunity with you.",
        "We have an exciting collaboration proposal for you.",
    ],
    closing: &[
        "I look forward to hearing from you.",
        "Please let me know if you're interested.",
        "I'd be happy to discuss this further at your convenience.",
    ],
    call_to_action: "Would you be available for a brief call this week to discuss the details?",
    subject: &[
        "Collaboration Opportunity - {product} x {name}",
        "Partnership Proposal for {name}",
        "Brand Collaboration Inquiry - {product}",
    ],
    intro: "I'm reaching out from {product}. ",
    description_chars: 100,
};

static FRIENDLY: ToneTemplates = ToneTemplates {
    greeting: &["Hey {name}! 👋", "Hi {name}!", "Hello {name}! 😊"],
    opening: &[
        "Hope you're having an amazing day!",
        "I hope you're doing well!",
        "Hope all is good with you!",
    ],
    compliment: &[
        "I absolutely love your content about {content_focus}! 💕",
        "Your {content_focus} posts are incredible!",
        "I'm such a fan of your {content_focus} content! ✨",
    ],
    proposal: &[
        "I'd love to chat about a fun collaboration opportunity!",
        "We have an exciting partnership idea for you!",
        "Would you be interested in working together on something cool?",
    ],
    closing: &[
        "Can't wait to hear from you! 🌟",
        "Hope to connect soon!",
        "Looking forward to your thoughts! 💭",
    ],
    call_to_action: "Would you be up for a quick chat about this? I'd love to hear your thoughts!",
    subject: &[
        "Hey {name}! Collaboration opportunity 🌟",
        "Would love to work with you, {name}! ✨",
        "Exciting partnership idea for you, {name}!",
    ],
    intro: "I'm from the team at {product}! We're all about ",
    description_chars: 80,
};

static LUXURY: ToneTemplates = ToneTemplates {
    greeting: &["Dear {name},", "Greetings {name},"],
    opening: &[
        "I trust this message finds you in excellent spirits.",
        "I hope this note reaches you well.",
    ],
    compliment: &[
        "Your sophisticated approach to {content_focus} aligns perfectly with our brand values.",
        "We've been captivated by your elegant {content_focus} content.",
        "Your refined taste in {content_focus} resonates with our luxury brand.",
    ],
    proposal: &[
        "We would be honored to collaborate with you on an exclusive partnership.",
        "I'd like to present an exclusive collaboration opportunity.",
        "We have a premium partnership proposal that I believe would interest you.",
    ],
    closing: &[
        "I would be delighted to discuss this opportunity further.",
        "I look forward to the possibility of working together.",
        "Please let me know if this aligns with your interests.",
    ],
    call_to_action: "I would be delighted to arrange a call to discuss this exclusive opportunity.",
    subject: &[
        "Exclusive Partnership Opportunity - {product}",
        "Premium Collaboration Proposal for {name}",
        "Luxury Brand Partnership - {product}",
    ],
    intro: "I represent {product}, a premium brand that ",
    description_chars: 90,
};

static PLAYFUL: ToneTemplates = ToneTemplates {
    greeting: &["Hey there {name}! 🎉", "Hi {name}! ✨", "Hello amazing {name}! 🌟"],
    opening: &[
        "Hope you're having the best day ever!",
        "Sending good vibes your way! ✨",
        "Hope your day is as awesome as your content! 🔥",
    ],
    compliment: &[
        "Your {content_focus} content is absolutely fire! 🔥",
        "I'm obsessed with your {content_focus} posts! 😍",
        "Your {content_focus} game is on point! 💯",
    ],
    proposal: &[
        "We've got something super exciting to share with you! 🎊",
        "Ready for an epic collaboration? 🚀",
        "Want to create something amazing together? ✨",
    ],
    closing: &[
        "Let's make magic happen! ✨",
        "Can't wait to hear your thoughts! 🎉",
        "Ready to rock this together? 🤘",
    ],
    call_to_action: "Want to hop on a call and brainstorm some amazing content ideas together?",
    subject: &[
        "Let's create something amazing together, {name}! 🎉",
        "Epic collab opportunity for you! 🚀",
        "Ready to make some magic, {name}? ✨",
    ],
    intro: "I'm with the awesome team at {product}! We're doing some cool stuff with ",
    description_chars: 70,
};

/// Map a brand tone onto one with a template set. Tones without their own
/// templates fall back to friendly.
#[must_use]
pub fn resolve_tone(tone: BrandTone) -> BrandTone {
    match tone {
        BrandTone::Professional | BrandTone::Friendly | BrandTone::Luxury | BrandTone::Playful => {
            tone
        }
        BrandTone::Edgy | BrandTone::Casual | BrandTone::Other => BrandTone::Friendly,
    }
}

#[must_use]
pub fn templates_for(tone: BrandTone) -> &'static ToneTemplates {
    match resolve_tone(tone) {
        BrandTone::Professional => &PROFESSIONAL,
        BrandTone::Luxury => &LUXURY,
        BrandTone::Playful => &PLAYFUL,
        _ => &FRIENDLY,
    }
}

/// Brand introduction line: tone lead-in plus the product description cut to
/// the tone's character budget, always followed by `...`.
#[must_use]
pub fn brand_introduction(tone: BrandTone, product_name: &str, description: &str) -> String {
    let t = templates_for(tone);
    let excerpt: String = description.chars().take(t.description_chars).collect();
    format!("{}{excerpt}...", t.intro.replace("{product}", product_name))
}

const REACH_CLAUSE: &str = " Given your impressive reach, this could be a fantastic opportunity for both of us!";
const COMMUNITY_CLAUSE: &str =
    " Your engaged community is exactly the audience we're looking to connect with!";

/// Follower count above which the reach clause replaces the community clause.
pub const REACH_THRESHOLD: u64 = 100_000;

#[must_use]
pub fn value_proposition(goal: CampaignGoal, followers: u64) -> String {
    let base = match goal {
        CampaignGoal::Sales => {
            "We're looking for authentic partnerships that drive real value for both your audience and our brand."
        }
        CampaignGoal::Ugc => {
            "We'd love to work with you to create authentic content that showcases our products in your unique style."
        }
        CampaignGoal::Engagement => {
            "This partnership would create engaging content that resonates with your audience while highlighting our brand values."
        }
        CampaignGoal::Awareness | CampaignGoal::Leads | CampaignGoal::BrandBuilding => {
            "This collaboration would help introduce our brand to your amazing community while providing your followers with products they'll genuinely love."
        }
    };
    let clause = if followers > REACH_THRESHOLD {
        REACH_CLAUSE
    } else {
        COMMUNITY_CLAUSE
    };
    format!("{base}{clause}")
}
