use crate::keyboard::Key;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrigramFlow {
    pub is_alternate: bool, // L R L
    pub is_roll: bool,      // two keys on one hand, then the other hand (or the reverse)
    pub is_onehand: bool,   // one hand, one direction (e.g. Pinky -> Ring -> Middle)
    pub is_redirect: bool,  // one hand, direction change (e.g. Ring -> Pinky -> Middle)
}

pub fn analyze_trigram(k1: &Key, k2: &Key, k3: &Key) -> TrigramFlow {
    let mut res = TrigramFlow::default();

    let (h1, h2, h3) = (k1.hand(), k2.hand(), k3.hand());
    let (f1, f2, f3) = (k1.finger, k2.finger, k3.finger);

    res.is_alternate = h1 == h3 && h1 != h2;
    res.is_roll = (h1 == h2 && f1 != f2 && h2 != h3) || (h2 == h3 && f2 != f3 && h3 != h1);

    // Must be a 3-key run on the same hand with three different fingers
    if h1 != h2 || h2 != h3 || f1 == f2 || f2 == f3 || f1 == f3 {
        return res;
    }

    if f1.direction_to(f2) == f2.direction_to(f3) {
        res.is_onehand = true;
    } else {
        res.is_redirect = true;
    }

    res
}
