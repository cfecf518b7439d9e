//! Bundled mock posts shown when no feed file is given.

use crate::post::{PostId, PostView};

#[allow(clippy::too_many_arguments)]
fn post(
    id: u64,
    avatar: &str,
    username: &str,
    handle: &str,
    content: &str,
    image: Option<&str>,
    counts: (u64, u64, u64),
    timestamp: &str,
) -> PostView {
    let (likes, comments, shares) = counts;
    PostView {
        id: PostId(id),
        avatar: avatar.to_string(),
        username: username.to_string(),
        handle: handle.to_string(),
        content: content.to_string(),
        image: image.map(str::to_string),
        likes,
        comments,
        shares,
        timestamp: timestamp.to_string(),
    }
}

/// Returns the five mock posts in feed order.
pub fn mock_posts() -> Vec<PostView> {
    vec![
        post(
            1,
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
            "Sarah Chen",
            "sarahc",
            "Just finished my morning meditation session 🧘‍♀️ Starting the day with positive vibes! What's everyone's morning routine?",
            None,
            (234, 45, 12),
            "2h",
        ),
        post(
            2,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop",
            "Alex Rivera",
            "alexr",
            "The sunset today was absolutely breathtaking! Nature never fails to amaze me 🌅",
            Some("https://images.unsplash.com/photo-1495616811223-4d98c6e9c869?w=600&h=400&fit=crop"),
            (892, 123, 67),
            "4h",
        ),
        post(
            3,
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop",
            "Maya Johnson",
            "mayaj",
            "Finally launched my new project after months of hard work! 🚀 Can't wait to share more details with you all. Stay tuned!",
            None,
            (1542, 234, 89),
            "6h",
        ),
        post(
            4,
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop",
            "David Kim",
            "davidk",
            "Coffee and coding - the perfect combo ☕💻 Working on something exciting today!",
            Some("https://images.unsplash.com/photo-1497935586351-b67a49e012bf?w=600&h=400&fit=crop"),
            (456, 78, 23),
            "8h",
        ),
        post(
            5,
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=150&h=150&fit=crop",
            "Emma Wilson",
            "emmaw",
            "Remember: Your vibe attracts your tribe ✨ Surround yourself with people who lift you up and inspire you to be the best version of yourself.",
            None,
            (2341, 456, 234),
            "12h",
        ),
    ]
}
