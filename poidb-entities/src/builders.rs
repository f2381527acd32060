pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, image_builder::*, interest_point_builder::*};

pub mod interest_point_builder {

    use super::*;
    use crate::{
        address::*, approval::*, geo::*, id::*, interest_point::*, location::*, revision::*,
        time::*, user::*,
    };

    #[derive(Debug)]
    pub struct InterestPointBuild {
        interest_point: InterestPoint,
    }

    impl InterestPointBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.interest_point.id = id.into();
            self
        }
        pub fn revision(mut self, v: u64) -> Self {
            self.interest_point.revision = v.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.interest_point.name = name.into();
            self
        }
        pub fn summary(mut self, summary: &str) -> Self {
            self.interest_point.summary = summary.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.interest_point.location.pos = Some(pos);
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.interest_point.location.address = Some(address);
            self
        }
        pub fn category(mut self, category: Option<&str>) -> Self {
            self.interest_point.category = category.map(Into::into);
            self
        }
        pub fn contributor(mut self, contributor: i64) -> Self {
            self.interest_point.contributor = contributor.into();
            self
        }
        pub fn approved_by(mut self, approver: i64) -> Self {
            self.interest_point.approval = Some(Approval::now(approver.into()));
            self
        }
        pub fn default_image(mut self, image_id: Option<&str>) -> Self {
            self.interest_point.default_image = image_id.map(Into::into);
            self
        }
        pub fn finish(self) -> InterestPoint {
            self.interest_point
        }
    }

    impl Builder for InterestPoint {
        type Build = InterestPointBuild;
        fn build() -> InterestPointBuild {
            InterestPointBuild {
                interest_point: InterestPoint {
                    id: Id::new(),
                    revision: Revision::initial(),
                    created_at: Timestamp::now(),
                    name: "".into(),
                    summary: "".into(),
                    location: Location::default(),
                    category: None,
                    contributor: UserId::new(1),
                    approval: None,
                    default_image: None,
                },
            }
        }
    }
}

pub mod image_builder {

    use super::*;
    use crate::{id::*, image::*, user::*};

    #[derive(Debug)]
    pub struct ImageBuild {
        image: Image,
    }

    impl ImageBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.image.id = id.into();
            self
        }
        pub fn file_url(mut self, url: &str) -> Self {
            self.image.file_url = url.into();
            self
        }
        pub fn interest_point(mut self, id: &str) -> Self {
            self.image.interest_point = Some(id.into());
            self
        }
        pub fn contributor(mut self, contributor: i64) -> Self {
            self.image.contributor = contributor.into();
            self
        }
        pub fn finish(self) -> Image {
            self.image
        }
    }

    impl Builder for Image {
        type Build = ImageBuild;
        fn build() -> ImageBuild {
            ImageBuild {
                image: Image {
                    id: Id::new(),
                    file_url: "image/lighthouse.jpg".into(),
                    interest_point: None,
                    contributor: UserId::new(1),
                    approver: None,
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn line_1(mut self, x: &str) -> Self {
            self.addr.line_1 = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = Some(x.into());
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> AddressBuild {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }
}
