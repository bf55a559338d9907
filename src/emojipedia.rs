//! Emoji glyphs addressable through `:NAME:` shortcodes in phrase files.

/// `(shortcode, glyph)` pairs, ordered by shortcode. Shortcodes are upper case.
pub const EMOJI: &[(&str, &str)] = &[
    ("AIRPLANE", "✈️"),
    ("ALARM_CLOCK", "⏰"),
    ("ALIEN", "👽"),
    ("ANGRY_FACE", "😠"),
    ("ASTONISHED_FACE", "😲"),
    ("BACKHAND_INDEX_POINTING_DOWN", "👇"),
    ("BACKHAND_INDEX_POINTING_LEFT", "👈"),
    ("BACKHAND_INDEX_POINTING_RIGHT", "👉"),
    ("BACKHAND_INDEX_POINTING_UP", "👆"),
    ("BANANA", "🍌"),
    ("BEAMING_FACE_WITH_SMILING_EYES", "😁"),
    ("BEER_MUG", "🍺"),
    ("BELL", "🔔"),
    ("BIRTHDAY_CAKE", "🎂"),
    ("BLACK_CIRCLE", "⚫"),
    ("BLACK_HEART", "🖤"),
    ("BLUE_CIRCLE", "🔵"),
    ("BLUE_HEART", "💙"),
    ("BOOKS", "📚"),
    ("BROKEN_HEART", "💔"),
    ("BUTTERFLY", "🦋"),
    ("CALENDAR", "📅"),
    ("CAT_FACE", "🐱"),
    ("CHECK_MARK", "✔️"),
    ("CHECK_MARK_BUTTON", "✅"),
    ("CHEQUERED_FLAG", "🏁"),
    ("CLAPPING_HANDS", "👏"),
    ("CLINKING_GLASSES", "🥂"),
    ("CLOUD", "☁️"),
    ("CLOWN_FACE", "🤡"),
    ("COLD_FACE", "🥶"),
    ("COLLISION", "💥"),
    ("CONFETTI_BALL", "🎊"),
    ("CONFOUNDED_FACE", "😖"),
    ("CONFUSED_FACE", "😕"),
    ("COOL_BUTTON", "🆒"),
    ("CROSSED_FINGERS", "🤞"),
    ("CROSS_MARK", "❌"),
    ("CROWN", "👑"),
    ("CRYING_FACE", "😢"),
    ("DISAPPOINTED_FACE", "😞"),
    ("DOG_FACE", "🐶"),
    ("DOWN_ARROW", "⬇️"),
    ("DRAGON", "🐉"),
    ("DROPLET", "💧"),
    ("ENVELOPE", "✉️"),
    ("EVERGREEN_TREE", "🌲"),
    ("EXPLODING_HEAD", "🤯"),
    ("EXPRESSIONLESS_FACE", "😑"),
    ("EYES", "👀"),
    ("E_MAIL", "📧"),
    ("FACE_BLOWING_A_KISS", "😘"),
    ("FACE_SAVORING_FOOD", "😋"),
    ("FACE_SCREAMING_IN_FEAR", "😱"),
    ("FACE_WITH_MEDICAL_MASK", "😷"),
    ("FACE_WITH_OPEN_MOUTH", "😮"),
    ("FACE_WITH_ROLLING_EYES", "🙄"),
    ("FACE_WITH_TEARS_OF_JOY", "😂"),
    ("FACE_WITH_TONGUE", "😛"),
    ("FEARFUL_FACE", "😨"),
    ("FIRE", "🔥"),
    ("FLAG_FRANCE", "🇫🇷"),
    ("FLAG_GERMANY", "🇩🇪"),
    ("FLAG_ITALY", "🇮🇹"),
    ("FLAG_JAPAN", "🇯🇵"),
    ("FLAG_SPAIN", "🇪🇸"),
    ("FLAG_UNITED_KINGDOM", "🇬🇧"),
    ("FLAG_UNITED_STATES", "🇺🇸"),
    ("FLEXED_BICEPS", "💪"),
    ("FLUSHED_FACE", "😳"),
    ("FOLDED_HANDS", "🙏"),
    ("FOUR_LEAF_CLOVER", "🍀"),
    ("FREE_BUTTON", "🆓"),
    ("FROWNING_FACE", "☹️"),
    ("GAME_DIE", "🎲"),
    ("GEAR", "⚙️"),
    ("GEM_STONE", "💎"),
    ("GHOST", "👻"),
    ("GLOBE_SHOWING_EUROPE_AFRICA", "🌍"),
    ("GLOBE_WITH_MERIDIANS", "🌐"),
    ("GLOWING_STAR", "🌟"),
    ("GREEN_CIRCLE", "🟢"),
    ("GREEN_HEART", "💚"),
    ("GRIMACING_FACE", "😬"),
    ("GRINNING_FACE", "😀"),
    ("GRINNING_FACE_WITH_BIG_EYES", "😃"),
    ("GRINNING_FACE_WITH_SMILING_EYES", "😄"),
    ("GRINNING_FACE_WITH_SWEAT", "😅"),
    ("GRINNING_SQUINTING_FACE", "😆"),
    ("GUITAR", "🎸"),
    ("HAMBURGER", "🍔"),
    ("HAMMER_AND_WRENCH", "🛠️"),
    ("HIGH_VOLTAGE", "⚡"),
    ("HOT_BEVERAGE", "☕"),
    ("HOT_FACE", "🥵"),
    ("HOURGLASS_DONE", "⌛"),
    ("HUGGING_FACE", "🤗"),
    ("HUNDRED_POINTS", "💯"),
    ("INBOX_TRAY", "📥"),
    ("INFORMATION", "ℹ️"),
    ("KEY", "🔑"),
    ("LAPTOP", "💻"),
    ("LEFT_ARROW", "⬅️"),
    ("LIGHT_BULB", "💡"),
    ("LINK", "🔗"),
    ("LOCKED", "🔒"),
    ("LOUDLY_CRYING_FACE", "😭"),
    ("LOUDSPEAKER", "📢"),
    ("MAGNIFYING_GLASS_TILTED_LEFT", "🔍"),
    ("MEGAPHONE", "📣"),
    ("MEMO", "📝"),
    ("MOBILE_PHONE", "📱"),
    ("MONEY_BAG", "💰"),
    ("MONEY_MOUTH_FACE", "🤑"),
    ("MUSICAL_NOTE", "🎵"),
    ("NAUSEATED_FACE", "🤢"),
    ("NERD_FACE", "🤓"),
    ("NEUTRAL_FACE", "😐"),
    ("NEW_BUTTON", "🆕"),
    ("NO_ENTRY", "⛔"),
    ("OK_HAND", "👌"),
    ("ORANGE_HEART", "🧡"),
    ("OUTBOX_TRAY", "📤"),
    ("PACKAGE", "📦"),
    ("PANDA", "🐼"),
    ("PAPERCLIP", "📎"),
    ("PARTYING_FACE", "🥳"),
    ("PARTY_POPPER", "🎉"),
    ("PENGUIN", "🐧"),
    ("PENSIVE_FACE", "😔"),
    ("PILE_OF_POO", "💩"),
    ("PIZZA", "🍕"),
    ("PLEADING_FACE", "🥺"),
    ("POUTING_FACE", "😡"),
    ("PROHIBITED", "🚫"),
    ("PURPLE_HEART", "💜"),
    ("PUSHPIN", "📌"),
    ("RAINBOW", "🌈"),
    ("RAISED_HAND", "✋"),
    ("RAISING_HANDS", "🙌"),
    ("RECYCLING_SYMBOL", "♻️"),
    ("RED_APPLE", "🍎"),
    ("RED_CIRCLE", "🔴"),
    ("RED_EXCLAMATION_MARK", "❗"),
    ("RED_HEART", "❤️"),
    ("RED_QUESTION_MARK", "❓"),
    ("RELIEVED_FACE", "😌"),
    ("RIGHT_ARROW", "➡️"),
    ("ROBOT", "🤖"),
    ("ROCKET", "🚀"),
    ("ROLLING_ON_THE_FLOOR_LAUGHING", "🤣"),
    ("ROSE", "🌹"),
    ("SEEDLING", "🌱"),
    ("SKULL", "💀"),
    ("SLEEPING_FACE", "😴"),
    ("SLEEPY_FACE", "😪"),
    ("SLIGHTLY_SMILING_FACE", "🙂"),
    ("SMILING_FACE_WITH_HALO", "😇"),
    ("SMILING_FACE_WITH_HEARTS", "🥰"),
    ("SMILING_FACE_WITH_HEART_EYES", "😍"),
    ("SMILING_FACE_WITH_HORNS", "😈"),
    ("SMILING_FACE_WITH_SMILING_EYES", "😊"),
    ("SMILING_FACE_WITH_SUNGLASSES", "😎"),
    ("SMIRKING_FACE", "😏"),
    ("SNAKE", "🐍"),
    ("SNOWFLAKE", "❄️"),
    ("SOCCER_BALL", "⚽"),
    ("SOS_BUTTON", "🆘"),
    ("SPARKLES", "✨"),
    ("SPARKLING_HEART", "💖"),
    ("SPEECH_BALLOON", "💬"),
    ("SPORTS_MEDAL", "🏅"),
    ("STAR", "⭐"),
    ("STAR_STRUCK", "🤩"),
    ("SUN", "☀️"),
    ("SUNFLOWER", "🌻"),
    ("THINKING_FACE", "🤔"),
    ("THUMBS_DOWN", "👎"),
    ("THUMBS_UP", "👍"),
    ("TIRED_FACE", "😫"),
    ("TROPHY", "🏆"),
    ("TURTLE", "🐢"),
    ("UNAMUSED_FACE", "😒"),
    ("UNICORN", "🦄"),
    ("UNLOCKED", "🔓"),
    ("UPSIDE_DOWN_FACE", "🙃"),
    ("UP_ARROW", "⬆️"),
    ("UP_BUTTON", "🆙"),
    ("VICTORY_HAND", "✌️"),
    ("VIDEO_GAME", "🎮"),
    ("WARNING", "⚠️"),
    ("WAVING_HAND", "👋"),
    ("WHITE_CIRCLE", "⚪"),
    ("WHITE_FLAG", "🏳️"),
    ("WINKING_FACE", "😉"),
    ("WINKING_FACE_WITH_TONGUE", "😜"),
    ("WOOZY_FACE", "🥴"),
    ("WORRIED_FACE", "😟"),
    ("WRAPPED_GIFT", "🎁"),
    ("YAWNING_FACE", "🥱"),
    ("YELLOW_HEART", "💛"),
    ("ZANY_FACE", "🤪"),
    ("ZIPPER_MOUTH_FACE", "🤐"),
    ("ZZZ", "💤"),
];

/// Looks up the glyph for an upper-case shortcode name (without colons).
///
/// # Examples
///
/// ```
/// use plate::emojipedia::glyph;
///
/// assert_eq!(glyph("THUMBS_UP"), Some("👍"));
/// assert_eq!(glyph("thumbs_up"), None);
/// ```
pub fn glyph(name: &str) -> Option<&'static str> {
    EMOJI
        .binary_search_by(|(candidate, _)| candidate.cmp(&name))
        .ok()
        .map(|index| EMOJI[index].1)
}
