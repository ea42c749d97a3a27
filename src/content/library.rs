//! # Built-in Content Library
//!
//! The shipped data set: one comfort message per emotion and one passage
//! for every (emotion, category) pair, 8 messages and 24 passages in
//! all. Content is compiled in; nothing is read from disk at runtime.

use crate::content::repository::ContentRepository;
use crate::content::types::Category::{Ayats, Hadiths, Stories};
use crate::content::types::Emotion::{
    Angry, Anxious, Depressed, Grateful, Hopeful, Lonely, Sad, Stressed,
};

/// Build the repository holding the full built-in content set.
pub fn builtin() -> ContentRepository {
    let mut repo = ContentRepository::new();

    repo.set_comfort_message(Sad, "Do not be sad, for Allah is always with you 💖");
    repo.set_comfort_message(Stressed, "Do not be stressed; place your trust in Allah 🌸");
    repo.set_comfort_message(Grateful, "Keep being grateful, and your blessings will multiply 🌷");
    repo.set_comfort_message(Depressed, "Do not lose hope; Allah’s mercy is near ✨");
    repo.set_comfort_message(Anxious, "Be calm; Allah’s plan is perfect 🌿");
    repo.set_comfort_message(Angry, "Take a deep breath; patience is beloved to Allah 🌸");
    repo.set_comfort_message(Lonely, "You are never truly alone; Allah is always close 🌷");
    repo.set_comfort_message(Hopeful, "Keep hope alive; Allah guides the sincere ✨");

    repo.set_passage(Sad, Ayats, "إِنَّ مَعَ الْعُسْرِ يُسْرًا\nInna ma'a al-'usri yusra\nIndeed, with hardship comes ease. (Qur'an 94:5-6)");
    repo.set_passage(Sad, Hadiths, "«لاَ يُصِيبُ الْمُؤْمِنَ مِنْ نَصَبٍ وَلاَ وَصَبٍ وَلاَ هَمٍّ وَلاَ حَزَنٍ...»\nThe Prophet ﷺ said: 'No fatigue, nor disease, nor sorrow, nor sadness, nor hurt, nor distress befalls a Muslim, even the prick of a thorn, but that Allah expiates some of his sins for that.' — Ṣaḥīḥ al-Bukhārī & Ṣaḥīḥ Muslim.");
    repo.set_passage(Sad, Stories, "Prophet Ya'qub (AS) wept for Yusuf (AS) but said: 'I only complain of my suffering and my grief to Allah.' (Qur'an 12:86). His patience and turning to Allah illustrate how to handle deep sorrow.");

    repo.set_passage(Stressed, Ayats, "الَّذِينَ آمَنُوا وَتَطْمَئِنُّ قُلُوبُهُمْ بِذِكْرِ اللَّهِ\nThose who believe and whose hearts find comfort in the remembrance of Allah. Indeed, in the remembrance of Allah do hearts find rest. (Qur'an 13:28)");
    repo.set_passage(Stressed, Hadiths, "Hadith Qudsi: 'I am as My servant thinks of Me, and I am with him when he remembers Me.' — Ṣaḥīḥ al-Bukhārī & Ṣaḥīḥ Muslim.\nRemembrance and trust in Allah ease stress.");
    repo.set_passage(Stressed, Stories, "During the Hijrah, in the cave, Abu Bakr (RA) felt fear; the Prophet ﷺ reassured him: 'Do not grieve; indeed Allah is with us.' (Qur'an 9:40)");

    repo.set_passage(Grateful, Ayats, "وَإِذْ تَأَذَّنَ رَبُّكُمْ لَئِن شَكَرْتُمْ لَأَزِيدَنَّكُمْ\nAnd when your Lord proclaimed: 'If you are grateful, I will surely increase you [in favor].' (Qur'an 14:7)");
    repo.set_passage(Grateful, Hadiths, "The Prophet ﷺ said: 'Should I not be a thankful servant?' (Ṣaḥīḥ al-Bukhārī & Ṣaḥīḥ Muslim) — demonstrating the Prophet's gratitude.");
    repo.set_passage(Grateful, Stories, "The Prophet ﷺ often showed gratitude by offering long night prayers (as an expression of thankfulness).");

    repo.set_passage(Depressed, Ayats, "لَا تَهِنُوا وَلَا تَحْزَنُوا وَأَنتُمُ الْأَعْلَوْنَ إِن كُنتُم مُّؤْمِنِينَ\nDo not lose hope nor be sad, and you will be superior if you are true believers. (Qur'an 3:139)");
    repo.set_passage(Depressed, Hadiths, "The Prophet ﷺ said: 'Wondrous is the affair of the believer… if he is harmed, he is patient and that is good for him.' — Ṣaḥīḥ Muslim.");
    repo.set_passage(Depressed, Stories, "Prophet Ayyub (AS) endured severe trials patiently; Allah restored his family and health due to his steadfastness (Qur'an 21:83–84).");

    repo.set_passage(Anxious, Ayats, "لَا يُكَلِّفُ اللَّهُ نَفْسًا إِلَّا وُسْعَهَا\nAllah does not burden a soul beyond that it can bear. (Qur'an 2:286)");
    repo.set_passage(Anxious, Hadiths, "The Prophet ﷺ said: 'If you were to rely upon Allah with the reliance He is due, He would provide for you as He provides for the birds...' — Jami' at-Tirmidhi.");
    repo.set_passage(Anxious, Stories, "Yunus (AS) cried out in the darkness of the whale and turned to Allah sincerely; his sincere supplication brought relief and rescue (Qur'an 21:87).");

    repo.set_passage(Angry, Ayats, "وَالْكَاظِمِينَ الْغَيْظَ وَالْعَافِينَ عَنِ النَّاسِ\nThose who restrain anger and pardon the people; Allah loves the doers of good. (Qur'an 3:134)");
    repo.set_passage(Angry, Hadiths, "A man asked the Prophet ﷺ for advice; he said: 'Do not become angry.' — Ṣaḥīḥ al-Bukhārī.");
    repo.set_passage(Angry, Stories, "At the conquest of Makkah the Prophet ﷺ forgave many who had harmed him previously—an example of restraint and mercy.");

    repo.set_passage(Lonely, Ayats, "وَإِذَا سَأَلَكَ عِبَادِي عَنِّي فَإِنِّي قَرِيبٌ\nAnd when My servants ask you concerning Me — indeed I am near. (Qur'an 2:186)");
    repo.set_passage(Lonely, Hadiths, "Allah says: 'I am as My servant thinks of Me; I am with him when he remembers Me.' — Ṣaḥīḥ al-Bukhārī & Ṣaḥīḥ Muslim.");
    repo.set_passage(Lonely, Stories, "Maryam (AS) experienced isolation yet Allah comforted and provided for her in childbirth (Qur'an 19:23–26).");

    repo.set_passage(Hopeful, Ayats, "قُلْ يَا عِبَادِيَ الَّذِينَ أَسْرَفُوا عَلَى أَنفُسِهِمْ لَا تَقْنَطُوا مِن رَّحْمَةِ اللَّهِ\nSay: 'O My servants who have transgressed against themselves, do not despair of the mercy of Allah.' (Qur'an 39:53)");
    repo.set_passage(Hopeful, Hadiths, "The Prophet ﷺ said: 'Allah's mercy prevails over His wrath.' — authentic collections.");
    repo.set_passage(Hopeful, Stories, "The story of Umar ibn al-Khattab (RA) — once opposed to Islam, later guided; a reminder that sincere turning to Allah opens the way to hope and transformation.");

    repo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::{DEFAULT_COMFORT_MESSAGE, DEFAULT_PASSAGE};
    use crate::content::{Category, Emotion};

    #[test]
    fn test_every_pair_is_populated() {
        let repo = builtin();
        assert_eq!(repo.passage_count(), Emotion::ALL.len() * Category::ALL.len());
        for e in Emotion::ALL {
            for c in Category::ALL {
                let text = repo.passage(e, c);
                assert_ne!(text, DEFAULT_PASSAGE, "missing passage for {e}/{c}");
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn test_every_emotion_has_a_comfort_message() {
        let repo = builtin();
        for e in Emotion::ALL {
            let msg = repo.comfort_message(e);
            assert_ne!(msg, DEFAULT_COMFORT_MESSAGE, "missing message for {e}");
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_documented_samples() {
        let repo = builtin();
        assert_eq!(
            repo.comfort_message(Sad),
            "Do not be sad, for Allah is always with you 💖"
        );
        assert!(repo.passage(Sad, Ayats).contains("Qur'an 94:5-6"));
        assert!(repo.passage(Angry, Hadiths).contains("Do not become angry"));
        assert!(repo.passage(Hopeful, Stories).contains("Umar ibn al-Khattab"));
    }
}
