pub mod configuration;

pub mod growth {
    pub mod growtherror;
    pub mod growthmetric;
    pub mod sex;
    pub mod interpretation;
    pub mod lms;
    pub mod referencepoint;
    pub mod referencetable;
    pub mod whoreferencedata;
    pub mod percentileresult;
    pub mod curvepoint;
    pub mod growthpercentileengine;
}

pub mod manager {
    pub mod referencetablemanager;
}

pub mod math {
    pub mod normaldistribution;
    pub mod round;
}
