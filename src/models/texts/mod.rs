// Texts module
// Compiled-in portal copy: countdown labels, header/footer prose, the
// announcement ticker and the fixed prayer times

/// Countdown target labels, one per resolver outcome.
pub mod labels {
    pub const UNTIL_SEHRI_ENDS: &str = "سحری ختم ہونے میں باقی وقت";
    pub const UNTIL_IFTAR: &str = "افطار ہونے میں باقی وقت";
    pub const UNTIL_NEXT_SEHRI: &str = "اگلی سحری میں باقی وقت";
    pub const UNTIL_RAMADAN_BEGINS: &str = "رمضان المبارک کی آمد میں باقی وقت";
    pub const RAMADAN_CONCLUDED: &str = "رمضان المبارک اختتام پذیر ہوا";
}

pub mod header {
    pub const LOCATION: &str = "گوجرخان، پاکستان";
    pub const TITLE_LEAD: &str = "سنی رضوی";
    pub const TITLE_ACCENT: &str = "اتحاد کونسل";
    pub const SUBTITLE: &str = "رمضان المبارک ۱۴۴۷ پورٹل";
}

pub mod announcement {
    pub const HEADING: &str = "اعلانات:";
    pub const TICKER: &str = "سنی رضوی اتحاد کونسل گوجرخان کے پورٹل میں خوش آمدید۔ ** یہاں آپ مسجد کے اہم اعلانات، چندے کی اپیل، یا کسی دکان / کاروبار کا اشتہار چلا سکتے ہیں۔ ** نمازِ جمعہ کی اذان 1:00 بجے اور جماعت 1:30 بجے ہوگی۔";
}

pub mod info {
    pub const TODAY_DATE: &str = "آج کی تاریخ";
    pub const ISLAMIC_YEAR: &str = "اسلامی سال";
    pub const HIJRI_YEAR: &str = "۱۴۴۷ ہجری";
    pub const FOOTER_SOURCE: &str = "اوقات بمطابق: دعوت اسلامی (رمضان ۲۰۲۶/۱۴۴۷)";
    pub const FOOTER_ADDRESS: &str = "یوسف آباد، ڈھوک ابرا، گوجر خان";
}

/// Prayer times panel (Hanafi). Fajr and Maghrib track the schedule table;
/// the middle three are fixed announcements, already in display form.
pub mod prayers {
    pub const PANEL_TITLE: &str = "اوقاتِ نماز (فقہ حنفی)";
    pub const FAJR: &str = "فجر";
    pub const ZUHR: &str = "ظہر";
    pub const ASR: &str = "عصر";
    pub const MAGHRIB: &str = "مغرب";
    pub const ISHA: &str = "عشاء";
    pub const ZUHR_TIME: &str = "01:30 PM";
    pub const ASR_TIME: &str = "04:45 PM";
    pub const ISHA_TIME: &str = "08:00 PM";
    pub const SEHRI_HEADING: &str = "وقتِ سحری";
    pub const IFTAR_HEADING: &str = "وقتِ افطار";
}

pub mod countdown_units {
    pub const HOURS: &str = "HOURS";
    pub const MINUTES: &str = "MINUTES";
    pub const SECONDS: &str = "SECONDS";
}
