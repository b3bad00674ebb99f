use chrono::{DateTime, TimeZone, Utc};

use playvault::models::*;

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_item_free() -> ListingItem {
    ListingItem {
        id: "650000000000000000000000".to_string(),
        title: "Stardew Valley".to_string(),
        platform: "Mac OS".to_string(),
        category: "mac".to_string(),
        size: "800 MB".to_string(),
        is_paid: false,
        price: None,
        cover_img: "https://cdn.test/stardew.jpg".to_string(),
        thumbnail: vec!["https://cdn.test/stardew-1.jpg".to_string()],
        download_link: vec!["https://mirror.test/stardew.dmg".to_string()],
        description: "Farming sim.".to_string(),
        system_requirements: None,
        tags: vec!["simulation".to_string()],
        created_at: Some(parse_time("2025-11-04T22:15:06Z")),
        updated_at: Some(parse_time("2026-01-04T22:15:06Z")),
    }
}

pub fn get_seed_item_paid() -> ListingItem {
    ListingItem {
        id: "650000000000000000000001".to_string(),
        title: "Hogwarts Legacy".to_string(),
        platform: "Mac OS".to_string(),
        category: "mac".to_string(),
        size: "85 GB".to_string(),
        is_paid: true,
        price: Some(4.99),
        cover_img: "https://cdn.test/hogwarts.jpg".to_string(),
        thumbnail: vec![],
        download_link: vec!["https://mirror.test/hogwarts.dmg".to_string()],
        description: "Open-world RPG.".to_string(),
        system_requirements: None,
        tags: vec![],
        created_at: Some(parse_time("2026-01-05T13:22:56Z")),
        updated_at: None,
    }
}

pub fn get_seed_session_user() -> Session {
    Session {
        token: "tok-user".to_string(),
        username: "bob".to_string(),
        role: Role::User,
        user_id: "u-0001".to_string(),
        purchased: vec!["650000000000000000000001".to_string()],
    }
}

pub fn get_seed_session_admin() -> Session {
    Session {
        token: "tok-admin".to_string(),
        username: "alice".to_string(),
        role: Role::Admin,
        user_id: "u-0002".to_string(),
        purchased: vec![],
    }
}

pub fn get_seed_session_fresh() -> Session {
    Session {
        token: "tok-fresh".to_string(),
        username: "carol".to_string(),
        role: Role::User,
        user_id: "u-0003".to_string(),
        purchased: vec![],
    }
}
