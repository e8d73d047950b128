#![cfg(test)]

use crate::dict::{parse_kanjidic, KanjiDictionary};
use crate::romaji::WanaKana;
use crate::transliterate::Transliterator;

/// Shared test dictionary: KANJIDIC lines for the kanji used across
/// pattern, matcher and highlight tests.
pub const TEST_KANJIDIC: &str = "\
日 U65e5 ニチ ジツ ひ -び -か {day} {sun}\n\
本 U672c ホン もと {book} {origin}\n\
山 U5c71 サン セン やま {mountain}\n\
雪 U96ea セツ ゆき {snow}\n\
夜 U591c ヤ よ よる {night}\n\
桜 U685c オウ ヨウ さくら {cherry}\n\
東 U6771 トウ ひがし {east}\n\
京 U4eac キョウ ケイ キン みやこ {capital}\n\
学 U5b66 ガク まな.ぶ {study}\n\
校 U6821 コウ キョウ {school}\n\
背 U80cc ハイ せ せい そむ.く そむ.ける {stature} {back}\n\
筋 U7b4b キン すじ {muscle}\n\
鍛 U935b タン きた.える {forge}\n\
中 U4e2d チュウ なか うち あた.る {in} {inside}\n\
伸 U4f38 シン の.びる の.ばす の.べる の.す {expand}\n\
私 U79c1 シ わたくし わたし {private} {I}\n\
登 U767b トウ ト ドウ ショウ チョウ のぼ.る あ.がる {ascend}\n\
記 U8a18 キ しる.す {scribe}\n\
高 U9ad8 コウ たか.い たか -だか たか.まる たか.める {tall}\n\
写 U5199 シャ ジャ うつ.す うつ.る うつ- うつ.し {copy}\n\
真 U771f シン ま ま- まこと {true}\n\
春 U6625 シュン はる {springtime}\n\
並 U4e26 ヘイ ホウ な.み なみ なら.べる なら.ぶ なら.びに {row}\n\
木 U6728 ボク モク き こ- {tree}\n\
文 U6587 ブン モン ふみ あや {sentence}\n\
化 U5316 カ ケ ば.ける ば.かす ふ.ける け.する {change}\n\
語 U8a9e ゴ かた.る かた.らう {word}\n\
勉 U52c9 ベン つと.める {exertion}\n\
強 U5f37 キョウ ゴウ つよ.い つよ.まる つよ.める し.いる こわ.い {strong}\n\
頭 U982d トウ ズ ト あたま かしら -がしら かぶり {head}\n\
冷 U51b7 レイ つめ.たい ひ.える ひ.や ひ.ややか ひ.やす ひ.やかす ひ.める さ.める さ.ます {cool}\n\
猫 U732b ビョウ ねこ {cat}\n\
海 U6d77 カイ うみ {sea}\n\
景 U666f ケイ {scenery}\n\
色 U8272 ショク シキ いろ {color}\n\
新 U65b0 シン あたら.しい あら.た あら- にい- {new}\n\
聞 U805e ブン モン き.く き.こえる {hear}\n\
地 U5730 チ ジ {ground}\n\
図 U56f3 ズ ト え はか.る {map}\n\
見 U898b ケン み.る み.える み.せる {see}\n\
機 U6a5f キ はた {machine}\n\
能 U80fd ノウ よ.く {ability}\n\
田 U7530 デン た {rice field}\n\
太 U592a タイ タ ふと.い ふと.る {plump}\n\
郎 U90ce ロウ リョウ おとこ {son}\n\
運 U904b ウン はこ.ぶ {carry}\n\
動 U52d5 ドウ うご.く うご.かす {move}\n\
生 U751f セイ ショウ い.きる い.かす い.ける う.まれる う.む お.う は.える は.やす き なま な.る な.す {life}\n\
上 U4e0a ジョウ ショウ シャン うえ -うえ うわ- かみ あ.げる あ.がる のぼ.る のぼ.せる {above}\n\
下 U4e0b カ ゲ した しも もと さ.げる さ.がる くだ.る くだ.す くだ.さる お.ろす お.りる {below}\n\
";

pub fn test_dict() -> KanjiDictionary {
    parse_kanjidic(TEST_KANJIDIC).0
}

/// Run `f` with a transliterator over [`test_dict`].
pub fn with_test_translit<R>(f: impl FnOnce(&Transliterator<'_>) -> R) -> R {
    let dict = test_dict();
    let t = Transliterator::new(&WanaKana, &dict);
    f(&t)
}
