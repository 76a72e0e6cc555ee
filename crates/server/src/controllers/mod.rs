mod home;

pub(crate) use home::HomeController;
