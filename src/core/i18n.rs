//! Static string table for the supported interface languages.
//!
//! Every language carries every key; there is no runtime fallback.

use crate::models::Language;
use serde::Serialize;

/// All user-visible strings for one language
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Texts {
    pub app_name: &'static str,
    pub onboarding_title: &'static str,
    pub onboarding_subtitle: &'static str,
    pub your_name: &'static str,
    pub your_name_placeholder: &'static str,
    pub select_mood: &'static str,
    pub select_interests: &'static str,
    pub get_started: &'static str,
    pub fill_all_fields: &'static str,
    pub welcome_back: &'static str,
    pub find_friends_prompt: &'static str,
    pub getting_location: &'static str,
    pub find_friends_button: &'static str,
    pub nearby_people: &'static str,
    pub km_away: &'static str,
    pub shared_interests: &'static str,
    pub chat: &'static str,
    pub type_message: &'static str,
    /// Contains an `{interest}` placeholder
    pub chat_greeting: &'static str,
    pub chat_auto_reply: &'static str,
    pub location_permission_denied: &'static str,
    pub location_unavailable: &'static str,
    pub location_timeout: &'static str,
    pub location_unsupported: &'static str,
    pub location_unknown: &'static str,
}

impl Texts {
    /// Greeting from a candidate, naming the interest they lead with
    pub fn greeting(&self, interest: &str) -> String {
        self.chat_greeting.replace("{interest}", interest)
    }
}

static EN: Texts = Texts {
    app_name: "Nearby Vibes",
    onboarding_title: "Welcome!",
    onboarding_subtitle: "Tell us a little about yourself to find friends nearby.",
    your_name: "Your name",
    your_name_placeholder: "e.g. Alex",
    select_mood: "How are you feeling?",
    select_interests: "Pick up to 3 interests",
    get_started: "Get started",
    fill_all_fields: "Please fill out all fields.",
    welcome_back: "Welcome back,",
    find_friends_prompt: "Ready to meet people around you?",
    getting_location: "Getting your location...",
    find_friends_button: "Find friends nearby",
    nearby_people: "People nearby",
    km_away: "km away",
    shared_interests: "Shared interests",
    chat: "Chat",
    type_message: "Type a message...",
    chat_greeting: "Hey! I see we both like {interest}.",
    chat_auto_reply: "That's cool! What's up?",
    location_permission_denied: "Location permission denied. Please enable it to find friends nearby.",
    location_unavailable: "Location information is unavailable.",
    location_timeout: "The request to get user location timed out.",
    location_unsupported: "Geolocation is not supported by your browser.",
    location_unknown: "An unknown error occurred while fetching location.",
};

static TH: Texts = Texts {
    app_name: "Nearby Vibes",
    onboarding_title: "ยินดีต้อนรับ!",
    onboarding_subtitle: "บอกเราเกี่ยวกับตัวคุณเพื่อหาเพื่อนใกล้ๆ",
    your_name: "ชื่อของคุณ",
    your_name_placeholder: "เช่น อเล็กซ์",
    select_mood: "ตอนนี้คุณรู้สึกอย่างไร?",
    select_interests: "เลือกความสนใจได้สูงสุด 3 อย่าง",
    get_started: "เริ่มต้นใช้งาน",
    fill_all_fields: "กรุณากรอกข้อมูลให้ครบทุกช่อง",
    welcome_back: "ยินดีต้อนรับกลับ,",
    find_friends_prompt: "พร้อมจะพบผู้คนรอบตัวคุณหรือยัง?",
    getting_location: "กำลังหาตำแหน่งของคุณ...",
    find_friends_button: "หาเพื่อนใกล้ๆ",
    nearby_people: "คนที่อยู่ใกล้คุณ",
    km_away: "กม.",
    shared_interests: "ความสนใจที่ตรงกัน",
    chat: "แชท",
    type_message: "พิมพ์ข้อความ...",
    chat_greeting: "สวัสดี! เราทั้งคู่ชอบ {interest} เหมือนกันนะ",
    chat_auto_reply: "เจ๋งเลย! เป็นยังไงบ้าง?",
    location_permission_denied: "ไม่ได้รับอนุญาตให้เข้าถึงตำแหน่ง กรุณาเปิดใช้งานเพื่อหาเพื่อนใกล้ๆ",
    location_unavailable: "ไม่สามารถระบุตำแหน่งได้",
    location_timeout: "การขอตำแหน่งหมดเวลา",
    location_unsupported: "เบราว์เซอร์ของคุณไม่รองรับการระบุตำแหน่ง",
    location_unknown: "เกิดข้อผิดพลาดที่ไม่ทราบสาเหตุขณะหาตำแหน่ง",
};

static JP: Texts = Texts {
    app_name: "Nearby Vibes",
    onboarding_title: "ようこそ！",
    onboarding_subtitle: "近くの友達を見つけるために、あなたについて教えてください。",
    your_name: "お名前",
    your_name_placeholder: "例：アレックス",
    select_mood: "今の気分は？",
    select_interests: "興味を3つまで選んでください",
    get_started: "はじめる",
    fill_all_fields: "すべての項目を入力してください。",
    welcome_back: "おかえりなさい、",
    find_friends_prompt: "周りの人に会う準備はできましたか？",
    getting_location: "現在地を取得中...",
    find_friends_button: "近くの友達を探す",
    nearby_people: "近くの人",
    km_away: "km先",
    shared_interests: "共通の趣味",
    chat: "チャット",
    type_message: "メッセージを入力...",
    chat_greeting: "こんにちは！二人とも{interest}が好きなんですね。",
    chat_auto_reply: "いいですね！最近どうですか？",
    location_permission_denied: "位置情報の許可がありません。近くの友達を探すには許可してください。",
    location_unavailable: "位置情報を取得できません。",
    location_timeout: "位置情報の取得がタイムアウトしました。",
    location_unsupported: "お使いのブラウザは位置情報に対応していません。",
    location_unknown: "位置情報の取得中に不明なエラーが発生しました。",
};

/// Look up the string table for a language
pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::EN => &EN,
        Language::TH => &TH,
        Language::JP => &JP,
    }
}
