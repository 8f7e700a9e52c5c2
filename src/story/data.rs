// SPDX-License-Identifier: MPL-2.0
use super::StoryPage;

/// The book shipped with the viewer.
pub static STORY_PAGES: &[StoryPage] = &[
    StoryPage::new(
        1,
        "はじめての ゆき",
        "ある さむい あさ、\nこぎつねの コンは めを さましました。\n\nまどの そとが まっしろに ひかっています。",
        "雪がつもった森の小さな巣穴から、こぎつねが顔を出している様子",
    ),
    StoryPage::new(
        2,
        "しろい もり",
        "コンは そとへ とびだしました。\n\nきも くさも いしも、\nみんな しろい ぼうしを かぶっています。",
        "真っ白な森の中を、こぎつねが跳ねるように走っている様子",
    ),
    StoryPage::new(
        3,
        "ちいさな あしあと",
        "ゆきの うえに、ちいさな あしあとが つづいています。\n\n「だれの あしあと だろう?」\nコンは あしあとを たどって いきました。",
        "雪の上に点々と続く小さな足あとを、こぎつねがのぞきこんでいる様子",
    ),
    StoryPage::new(
        4,
        "うさぎの ミミ",
        "あしあとの さきには、うさぎの ミミが いました。\n\n「いっしょに ゆきだるまを つくろうよ」\nミミが いいました。",
        "白いうさぎが雪玉を転がしながら、こぎつねに手をふっている様子",
    ),
    StoryPage::new(
        5,
        "おおきな ゆきだるま",
        "ふたりは ゆきを ころがして、\nころがして、\nころがしました。\n\nできあがったのは、コンより ずっと おおきな ゆきだるま。",
        "こぎつねとうさぎが、大きな雪だるまの横で笑っている様子",
    ),
    StoryPage::new(
        6,
        "また あした",
        "ゆうひが ゆきを オレンジいろに そめるころ、\nふたりは てを ふって わかれました。\n\n「また あした あそぼうね」",
        "夕焼けに染まる雪原で、こぎつねとうさぎが手をふり合っている様子",
    ),
];
