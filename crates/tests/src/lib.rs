

#[cfg(test)]
mod role_matching_tests;

#[cfg(test)]
mod subscription_tests;


#[cfg(test)]
mod validation_tests;
